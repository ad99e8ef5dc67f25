use crate::controllers::ports::display_surface::DisplaySurfacePort;
use crate::core::data::frame_buffer::{BYTES_PER_PIXEL, FrameBuffer};
use log::info;
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `frame` as a binary PPM. PPM has no alpha channel so it is dropped.
pub fn write_ppm(frame: &FrameBuffer, mut writer: impl Write) -> std::io::Result<()> {
    let frame_size = frame.frame_size();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", frame_size.width(), frame_size.height())?;
    writeln!(writer, "255")?;

    let rgb: Vec<u8> = frame
        .data()
        .chunks_exact(BYTES_PER_PIXEL)
        .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
        .collect();
    writer.write_all(&rgb)?;

    writer.flush()
}

/// Display surface that overwrites a PPM file with every presented frame.
pub struct PpmFileSurface {
    path: PathBuf,
}

impl PpmFileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplaySurfacePort for PpmFileSurface {
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::File::create(&self.path)?;
        write_ppm(frame, std::io::BufWriter::new(file))?;

        info!("wrote frame to {}", self.path.display());

        Ok(())
    }
}
