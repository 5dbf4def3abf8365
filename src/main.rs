use std::io;

use anyhow::Context;
use anyhow::anyhow;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifegrid::draw::Surface;
use lifegrid::draw::TileRenderer;
use lifegrid::grid::Grid;
use lifegrid::settings::Settings;
use lifegrid::simulation::SimulationLoop;
use lifegrid::term;
use lifegrid::term::TerminalGuard;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let settings = Settings::default();

    let (surface, status) = term::open().context("Failed to open the terminal")?;
    let (width, height) = settings
        .tiles(surface.width(), surface.height())
        .context("Failed to fit a grid on the terminal")?;

    let grid = Grid::random(width, height, settings.live_probability, &mut rand::rng());
    info!(width, height, population = grid.population(), "seeded grid");

    let renderer = TileRenderer::new(surface, status, settings.tile_size, settings.style);
    let mut sim = SimulationLoop::new(grid, renderer);

    let guard = TerminalGuard::enter().context("Failed to set up the terminal")?;
    let input = lifegrid::io::listen(sim.stop_handle());

    let res = sim.start(settings.interval);

    // wind down the input thread if the simulation ended on its own
    sim.stop();
    let input = input.join();

    drop(guard);

    res.context("Simulation failed")?;
    input
        .map_err(|_| anyhow!("Input thread panicked"))?
        .context("Failed to read terminal events")?;

    Ok(())
}
