mod cli;

use clap::Parser;
use log::{info, warn};
use mandelzoom::{PpmFileSurface, Session, SessionError, ZoomController, ZoomOutcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = cli::Cli::parse();
    let config = cli.session_config()?;
    let zoom_controller = ZoomController::from_config(&config)?;
    let mut session = Session::new(config, PpmFileSurface::new(&cli.output))?;

    let summary = session.render()?;
    info!("initial frame rendered in {:?}", summary.render_duration);

    for click in &cli.clicks {
        for record in click.records() {
            match zoom_controller.on_interaction(&record, &mut session) {
                Ok(ZoomOutcome::Zoomed { request, summary }) => info!(
                    "zoomed by {} at ({}, {}) in {:?}",
                    request.scale_factor, request.anchor.col, request.anchor.row, summary.render_duration
                ),
                Ok(ZoomOutcome::Ignored) => {}
                Err(SessionError::Viewport(err)) => warn!("zoom rejected: {}", err),
                Err(err) => return Err(err.into()),
            }
        }
    }

    let region = session.viewport().region();
    info!(
        "final view x [{}, {}], y [{}, {}] written to {}",
        region.x_min(),
        region.x_max(),
        region.y_min(),
        region.y_max(),
        session.surface().path().display()
    );

    Ok(())
}
