use std::error::Error;

use log::{error, info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::session::errors::SessionError;
use crate::controllers::session::session::Session;
use crate::controllers::session::session_config::SessionConfig;
use crate::controllers::zoom::zoom_controller::{ZoomController, ZoomOutcome};
use crate::input::gui::pointer::PointerTracker;
use crate::presenters::pixels::surface::PixelsSurface;

/// Opens a fixed-size window and zooms on every click until it is closed.
pub fn run_gui(config: SessionConfig) -> Result<(), Box<dyn Error>> {
    let zoom_controller = ZoomController::from_config(&config)?;
    let event_loop = EventLoop::new()?;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("mandelzoom")
            .with_inner_size(PhysicalSize::new(
                config.frame_size.width(),
                config.frame_size.height(),
            ))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let surface = PixelsSurface::new(window, config.frame_size)?;
    let mut session = Session::new(config, surface)?;
    session.render()?;

    let mut pointer = PointerTracker::default();

    event_loop.run(|event, elwt| {
        let Event::WindowEvent { event, window_id } = event else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                pointer.moved(session.surface().window_pos_to_pixel(position.x, position.y));
            }
            WindowEvent::CursorLeft { .. } => pointer.left(),
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(record) = pointer.record(button, state) else {
                    return;
                };

                match zoom_controller.on_interaction(&record, &mut session) {
                    Ok(ZoomOutcome::Zoomed { summary, .. }) => {
                        info!("zoomed at ({}, {}) in {:?}", record.col, record.row, summary.render_duration);
                    }
                    Ok(ZoomOutcome::Ignored) => {}
                    Err(SessionError::Viewport(err)) => warn!("zoom rejected: {}", err),
                    Err(err) => {
                        error!("{}", err);
                        elwt.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = session.surface_mut().redraw() {
                    error!("redraw failed: {}", err);
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = session.surface_mut().resize_surface(size.width, size.height) {
                    error!("resize failed: {}", err);
                    elwt.exit();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}
