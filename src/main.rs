//! Office Rush entry point
//!
//! The browser build is driven from JavaScript through `office_rush::web`.
//! Natively this runs a headless demo: the autopilot plays a few runs while a
//! text renderer prints the road once per second of game time.
//!
//! Usage: office-rush [--runs N] [--seed N] [--tuning FILE] [--highscore FILE]

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Office Rush (native) starting...");
    demo::run(demo::Options::from_args(std::env::args().skip(1))?)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `web::wasm_start`, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::{Context, bail};

    use office_rush::autopilot::autopilot_input;
    use office_rush::persistence::FileStore;
    use office_rush::platform::LogAds;
    use office_rush::renderer::TextRenderer;
    use office_rush::sim::{GamePhase, Layout, SimEvent};
    use office_rush::{Game, Tuning};

    /// Simulated display refresh (60 Hz)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Print the road every this many frames
    const PRINT_EVERY: u64 = 60;
    /// Give up on a run after this much game time
    const MAX_RUN_MS: f64 = 5.0 * 60.0 * 1000.0;

    pub struct Options {
        runs: u32,
        seed: Option<u64>,
        tuning: Option<PathBuf>,
        highscore: PathBuf,
    }

    impl Options {
        pub fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
            let mut options = Options {
                runs: 3,
                seed: None,
                tuning: None,
                highscore: PathBuf::from("office-rush-highscore.json"),
            };

            while let Some(flag) = args.next() {
                let mut value = || {
                    args.next()
                        .with_context(|| format!("missing value for {flag}"))
                };
                match flag.as_str() {
                    "--runs" => options.runs = value()?.parse().context("--runs expects a number")?,
                    "--seed" => options.seed = Some(value()?.parse().context("--seed expects a number")?),
                    "--tuning" => options.tuning = Some(PathBuf::from(value()?)),
                    "--highscore" => options.highscore = PathBuf::from(value()?),
                    other => bail!("unknown argument: {other}"),
                }
            }
            Ok(options)
        }
    }

    pub fn run(options: Options) -> anyhow::Result<()> {
        let tuning = match &options.tuning {
            Some(path) => Tuning::load(path)
                .with_context(|| format!("loading tuning from {}", path.display()))?,
            None => Tuning::default(),
        };
        let seed = options.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        let mut game = Game::new(
            Layout::default(),
            tuning,
            FileStore::new(&options.highscore),
            LogAds::default(),
            seed,
        );
        let mut renderer = TextRenderer::default();

        let mut timestamp = 0.0;
        let mut frames: u64 = 0;
        let mut runs_finished = 0;

        while runs_finished < options.runs {
            game.queue(autopilot_input(game.state()));
            let events = game.frame(timestamp, &mut renderer);
            timestamp += FRAME_MS;
            frames += 1;

            if frames % PRINT_EVERY == 0 {
                println!("{}\n", renderer.frame());
            }

            for event in &events {
                if let SimEvent::GameOver {
                    obstacle,
                    score,
                    new_high_score,
                } = event
                {
                    runs_finished += 1;
                    println!("{}\n", renderer.frame());
                    println!(
                        "Run {} over: hit a {:?}, score {:.0}{}",
                        runs_finished,
                        obstacle,
                        score,
                        if *new_high_score { " (new best!)" } else { "" }
                    );
                }
            }

            if game.state().phase == GamePhase::Playing && game.state().elapsed_ms >= MAX_RUN_MS {
                println!("Autopilot survived {:.0}s, stopping", MAX_RUN_MS / 1000.0);
                break;
            }
        }

        println!("Best score: {:.0}", game.state().high_score);
        Ok(())
    }
}
