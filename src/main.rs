//! Candle Flap headless runner
//!
//! Drives a session at 60 Hz with the demo autopilot and reports the result.
//! Usage: `candle-flap [config.json] [--seed N] [--seconds S]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;

    use candle_flap::sim::{GameEvent, GamePhase, autopilot};
    use candle_flap::{GameConfig, LogReporter, ReportingListener, Session};

    const FRAME_MS: f32 = 1000.0 / 60.0;

    struct Options {
        config_path: Option<String>,
        seed: Option<u64>,
        seconds: f32,
    }

    fn parse_args() -> Result<Options, Box<dyn Error>> {
        let mut options = Options {
            config_path: None,
            seed: None,
            seconds: 60.0,
        };

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or("--seed needs a value")?;
                    options.seed = Some(value.parse()?);
                }
                "--seconds" => {
                    let value = args.next().ok_or("--seconds needs a value")?;
                    options.seconds = value.parse()?;
                }
                _ if options.config_path.is_none() && !arg.starts_with("--") => {
                    options.config_path = Some(arg);
                }
                _ => return Err(format!("unexpected argument: {arg}").into()),
            }
        }
        Ok(options)
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        let options = parse_args()?;

        let config = match &options.config_path {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        let seed = options.seed.unwrap_or_else(rand::random);

        let listener = ReportingListener::new(LogReporter, None);
        let mut session = Session::new(config, seed, listener)?;

        let frames = (options.seconds * 1000.0 / FRAME_MS) as u64;
        let mut frame = 0;
        while frame < frames {
            let snapshot = session.snapshot();
            if autopilot::wants_thrust(&snapshot, session.config()) {
                session.submit_thrust();
            }

            for event in session.tick(FRAME_MS) {
                match event {
                    GameEvent::ScoreChanged { score } => log::info!("Score: {}", score),
                    GameEvent::GameOver { cause, .. } => log::info!("Crashed: {:?}", cause),
                    GameEvent::Started | GameEvent::Reset => {}
                }
            }

            if session.phase() == GamePhase::GameOver {
                break;
            }
            frame += 1;
        }

        let elapsed = frame as f32 * FRAME_MS / 1000.0;
        println!(
            "seed {} | score {} | {:.1}s | {}",
            seed,
            session.score(),
            elapsed,
            if session.phase() == GamePhase::GameOver {
                "game over"
            } else {
                "survived"
            }
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Candle Flap (native) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point lives in the library, this is just to satisfy the compiler
}
