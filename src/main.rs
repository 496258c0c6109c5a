//! Terminal grid world runner (default binary).
//!
//! Opens the terminal, generates a map sized to it, and walks the avatar
//! around with hjkl (or the arrow keys) until Esc.

use anyhow::{Context, Result};

use gridwalk::engine::{Session, WorldConfig};
use gridwalk::input::poller;
use gridwalk::term::{Surface, TerminalSurface};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = WorldConfig::default();
    init_logging();

    let surface = TerminalSurface::open().context("failed to initialize the terminal")?;
    let (width, height) = surface.size();
    log::info!(
        "gridwalk starting: {}x{}, layout={}, seed={}",
        width,
        height,
        config.layout.as_str(),
        config.seed
    );

    let world = config.build_world(width, height);
    let mut events = poller::spawn();
    let mut session = Session::new(world, surface);

    let result = run(&mut session, &mut events).await;

    // Always try to restore terminal state.
    let restored = session.into_surface().close();
    result.and(restored)
}

async fn run(
    session: &mut Session<TerminalSurface>,
    events: &mut tokio::sync::mpsc::UnboundedReceiver<gridwalk::types::InputEvent>,
) -> Result<()> {
    session.start()?;
    session.run(events).await
}

/// Debug builds log to `gridwalk.log`: stdout belongs to the game while it runs.
#[cfg(debug_assertions)]
fn init_logging() {
    use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(file) = std::fs::File::create("gridwalk.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, file);
    }
}

#[cfg(not(debug_assertions))]
fn init_logging() {}
