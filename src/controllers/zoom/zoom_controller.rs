use std::error::Error;
use std::fmt;

use log::debug;

use crate::controllers::ports::display_surface::DisplaySurfacePort;
use crate::controllers::render::render_orchestrator::RenderSummary;
use crate::controllers::session::errors::SessionError;
use crate::controllers::session::session::Session;
use crate::controllers::session::session_config::{
    DEFAULT_ZOOM_IN_SCALE, DEFAULT_ZOOM_OUT_SCALE, SessionConfig,
};
use crate::core::data::zoom_request::ZoomRequest;
use crate::input::interaction::{InteractionRecord, Phase, PointerButton};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomControllerError {
    InvalidScale { scale: f64 },
}

impl fmt::Display for ZoomControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "zoom scale must be positive and finite, got {}", scale)
            }
        }
    }
}

impl Error for ZoomControllerError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomOutcome {
    Ignored,
    Zoomed {
        request: ZoomRequest,
        summary: RenderSummary,
    },
}

/// Turns pointer releases into zooms: primary zooms in, secondary zooms out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomController {
    zoom_in_scale: f64,
    zoom_out_scale: f64,
}

impl ZoomController {
    pub fn new(zoom_in_scale: f64, zoom_out_scale: f64) -> Result<Self, ZoomControllerError> {
        for scale in [zoom_in_scale, zoom_out_scale] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ZoomControllerError::InvalidScale { scale });
            }
        }

        Ok(Self {
            zoom_in_scale,
            zoom_out_scale,
        })
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self, ZoomControllerError> {
        Self::new(config.zoom_in_scale, config.zoom_out_scale)
    }

    #[must_use]
    pub fn zoom_in_scale(&self) -> f64 {
        self.zoom_in_scale
    }

    #[must_use]
    pub fn zoom_out_scale(&self) -> f64 {
        self.zoom_out_scale
    }

    /// The zoom a record asks for, if any. Presses never zoom.
    #[must_use]
    pub fn zoom_request(&self, record: &InteractionRecord) -> Option<ZoomRequest> {
        if record.phase != Phase::Release {
            return None;
        }

        let scale_factor = match record.button {
            PointerButton::Primary => self.zoom_in_scale,
            PointerButton::Secondary => self.zoom_out_scale,
            PointerButton::Other(_) => return None,
        };

        Some(ZoomRequest {
            anchor: record.pixel(),
            scale_factor,
        })
    }

    pub fn on_interaction<S: DisplaySurfacePort>(
        &self,
        record: &InteractionRecord,
        session: &mut Session<S>,
    ) -> Result<ZoomOutcome, SessionError> {
        let Some(request) = self.zoom_request(record) else {
            debug!("ignoring {:?} {:?} at ({}, {})", record.button, record.phase, record.col, record.row);
            return Ok(ZoomOutcome::Ignored);
        };

        debug!(
            "zooming by {} at ({}, {})",
            request.scale_factor, request.anchor.col, request.anchor.row
        );

        let summary = session.zoom_and_render(request)?;

        Ok(ZoomOutcome::Zoomed { request, summary })
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self {
            zoom_in_scale: DEFAULT_ZOOM_IN_SCALE,
            zoom_out_scale: DEFAULT_ZOOM_OUT_SCALE,
        }
    }
}
