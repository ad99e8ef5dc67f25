use clap::Parser;
use mandelzoom::{
    DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM_IN_SCALE,
    DEFAULT_ZOOM_OUT_SCALE, FrameSize, FrameSizeError, InteractionRecord, MandelbrotConfig,
    ParsePointerButtonError, Phase, PixelCoordinate, PointerButton, RenderStrategy, SessionConfig,
};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug, Clone)]
#[command(name = "mandelzoom")]
#[command(about = "Render the Mandelbrot set and replay click-to-zoom interactions", long_about = None)]
pub struct Cli {
    #[arg(long, default_value_t = DEFAULT_FRAME_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_FRAME_HEIGHT)]
    pub height: u32,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    #[arg(long, default_value_t = DEFAULT_ZOOM_IN_SCALE)]
    pub zoom_in_scale: f64,

    #[arg(long, default_value_t = DEFAULT_ZOOM_OUT_SCALE)]
    pub zoom_out_scale: f64,

    /// Evaluate rows across all cores
    #[arg(long, default_value = "false")]
    pub parallel: bool,

    /// Click to replay, as `col,row,button`. May be repeated.
    #[arg(long = "click", value_name = "COL,ROW,BUTTON")]
    pub clicks: Vec<ClickArg>,

    #[arg(long, short, default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    FrameSize(FrameSizeError),
    ClickOutsideFrame { click: ClickArg, frame_size: FrameSize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameSize(err) => write!(f, "{}", err),
            Self::ClickOutsideFrame { click, frame_size } => write!(
                f,
                "click at {},{} is outside the {}x{} frame",
                click.col,
                click.row,
                frame_size.width(),
                frame_size.height()
            ),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FrameSize(err) => Some(err),
            Self::ClickOutsideFrame { .. } => None,
        }
    }
}

impl From<FrameSizeError> for CliError {
    fn from(err: FrameSizeError) -> Self {
        Self::FrameSize(err)
    }
}

impl Cli {
    /// Builds the session config. Every `--click` must land inside the frame.
    pub fn session_config(&self) -> Result<SessionConfig, CliError> {
        let frame_size = FrameSize::new(self.width, self.height)?;

        if let Some(click) = self.clicks.iter().find(|click| !frame_size.contains(click.pixel())) {
            return Err(CliError::ClickOutsideFrame {
                click: *click,
                frame_size,
            });
        }

        Ok(SessionConfig {
            frame_size,
            mandelbrot: MandelbrotConfig {
                max_iterations: self.max_iterations,
                ..MandelbrotConfig::default()
            },
            zoom_in_scale: self.zoom_in_scale,
            zoom_out_scale: self.zoom_out_scale,
            render_strategy: if self.parallel {
                RenderStrategy::Parallel
            } else {
                RenderStrategy::Serial
            },
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClickArg {
    pub col: u32,
    pub row: u32,
    pub button: PointerButton,
}

impl ClickArg {
    #[must_use]
    pub fn pixel(&self) -> PixelCoordinate {
        PixelCoordinate {
            col: self.col,
            row: self.row,
        }
    }

    /// A click is a press followed by a release at the same pixel.
    #[must_use]
    pub fn records(&self) -> [InteractionRecord; 2] {
        [Phase::Press, Phase::Release].map(|phase| InteractionRecord {
            col: self.col,
            row: self.row,
            button: self.button,
            phase,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseClickError {
    Format(String),
    Coordinate(String),
    Button(ParsePointerButtonError),
}

impl fmt::Display for ParseClickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(value) => write!(f, "expected COL,ROW,BUTTON but got '{}'", value),
            Self::Coordinate(value) => write!(f, "invalid pixel coordinate '{}'", value),
            Self::Button(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParseClickError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Button(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParsePointerButtonError> for ParseClickError {
    fn from(err: ParsePointerButtonError) -> Self {
        Self::Button(err)
    }
}

impl FromStr for ClickArg {
    type Err = ParseClickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [col, row, button] = parts.as_slice() else {
            return Err(ParseClickError::Format(s.to_string()));
        };

        let parse_coordinate = |value: &str| {
            value
                .parse::<u32>()
                .map_err(|_| ParseClickError::Coordinate(value.to_string()))
        };

        Ok(Self {
            col: parse_coordinate(*col)?,
            row: parse_coordinate(*row)?,
            button: button.parse()?,
        })
    }
}
