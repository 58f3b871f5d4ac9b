use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io;
use std::sync::Mutex;
use terminal_life::{
    Config, FixedRateClock, Simulation, presets, run,
    input::KeyboardClock,
    rendering::{PlainRenderer, TerminalRenderer, TerminalSession, terminal_size},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Logs go to the file when one is given. Otherwise only warnings reach
/// stderr while the terminal is in use, so the grid stays readable.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let default = if config.log_file.is_some() || config.headless {
        "terminal_life=info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    if config.list_presets {
        for pattern in presets::all_patterns() {
            let (rows, cols) = pattern.size();
            println!("{:<12} {:>3}x{:<3} {}", pattern.name, rows, cols, pattern.description);
        }
        return Ok(());
    }

    init_logging(&config)?;

    let (rows, cols) = config.dimensions(terminal_size().ok());
    let source = config.seed_source()?;
    let mut sim = Simulation::seeded(rows, cols, &source, config.edge_policy())?
        .with_evolution(config.evolution());
    info!(rows, cols, fps = config.fps, edge = config.edge_policy().name(), "configured");

    let summary = if config.headless {
        let mut renderer = PlainRenderer::new(io::stdout().lock());
        let mut clock = FixedRateClock::new(config.frame_period());
        run(&mut sim, &mut renderer, &mut clock, config.generations)?
    } else {
        let _session = TerminalSession::enter().context("failed to prepare the terminal")?;
        let mut renderer = TerminalRenderer::new(io::stdout())
            .with_palette(config.palette())
            .with_status(config.show_status());
        let mut clock = KeyboardClock::new(config.frame_period());
        run(&mut sim, &mut renderer, &mut clock, config.generations)?
    };

    info!(
        generations = summary.generations,
        population = summary.final_population,
        quit_by_user = summary.quit_by_user,
        "done"
    );
    Ok(())
}
