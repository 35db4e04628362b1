//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also explain where the selected runtime came from.
    Verbose,
    /// Results plus warnings and headers.
    #[default]
    Normal,
    /// Results only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows explanatory details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages, warnings and headers.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
