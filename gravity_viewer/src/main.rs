use gravity_engine::*;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod visual;

const FRAME_MS: f64 = 1000.0 / 60.0;
const USAGE: &str = "usage: gravity_viewer [headless|visual] [--config <path>] [--frames <n>]";

struct Options {
    mode: String,
    config: ScenarioConfig,
    frames: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            return;
        }
    };

    info!(mode = %options.mode, "starting viewer");

    match options.mode.as_str() {
        "headless" => run_headless(options.config, options.frames),
        "visual" => {
            if let Err(e) = visual::run_visual(options.config) {
                error!(error = %e, "visual viewer failed");
            }
        }
        other => eprintln!("Unknown mode: {}. Available modes: headless, visual", other),
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        mode: "headless".to_string(),
        config: ScenarioConfig::default(),
        // Two seconds past the default world lifetime
        frames: 720,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                options.config = ScenarioConfig::load(path)
                    .map_err(|e| format!("could not load {}: {}", path, e))?;
            }
            "--frames" => {
                let count = iter.next().ok_or("--frames needs a number")?;
                options.frames = count
                    .parse()
                    .map_err(|e| format!("bad frame count {:?}: {}", count, e))?;
            }
            mode if !mode.starts_with('-') => options.mode = mode.to_string(),
            flag => return Err(format!("unknown flag {}", flag)),
        }
    }
    Ok(options)
}

fn run_headless(config: ScenarioConfig, frames: u64) {
    let mut scenario = Scenario::start(config);

    for frame in 0..frames {
        if !scenario.is_running() {
            info!(frame, "scenario finished");
            break;
        }
        scenario.tick(FRAME_MS);

        let scene = scenario.simulation.scene();
        if frame % 30 == 0 {
            if let Some(dot) = scene.world.body(scenario.dot) {
                let position = dot.position();
                info!(frame, x = position.x, y = position.y, "dot position");
            }
        }
        for pair in &scene.last_report.collisions {
            info!(frame, first = pair.first, second = pair.second, "colliding");
        }
    }
    info!(frames = scenario.simulation.frame(), "headless run finished");
}
