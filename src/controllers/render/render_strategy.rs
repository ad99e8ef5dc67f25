/// How the per-pixel evaluation is scheduled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// Single-threaded row-major scan.
    #[default]
    Serial,
    /// Rows evaluated across rayon's thread pool.
    Parallel,
}

impl RenderStrategy {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
