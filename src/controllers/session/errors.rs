use crate::controllers::render::errors::RenderError;
use crate::controllers::session::session_config::SessionConfigError;
use crate::core::viewport::viewport_mapper::ViewportError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SessionError {
    Config(SessionConfigError),
    Viewport(ViewportError),
    Render(RenderError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid session config: {}", err),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<SessionConfigError> for SessionError {
    fn from(err: SessionConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ViewportError> for SessionError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<RenderError> for SessionError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
