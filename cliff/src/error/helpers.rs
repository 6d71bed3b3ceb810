//! Helpers for classifying errors and mapping them to exit codes.

use clap::{Error as ClapError, error::ErrorKind};

use super::CliffError;

/// Exit status reported for help and version requests.
pub(crate) const EXIT_SUCCESS: i32 = 0;

/// Exit status reported for every other failure.
pub(crate) const EXIT_USAGE: i32 = 2;

/// Returns `true` when a [`clap::Error`] corresponds to `--help` or
/// `--version`.
///
/// Clap surfaces these requests through specialised [`ErrorKind`] variants,
/// so callers of `try_get_matches` see them as errors even though the process
/// should exit successfully.
#[must_use]
pub fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

impl CliffError {
    /// Returns `true` when this error only signals that help was requested.
    #[must_use]
    pub fn is_help_request(&self) -> bool {
        matches!(self, Self::CliParsing(err) if is_display_request(err))
    }

    /// Process exit status matching this error: `0` for help requests and
    /// `2` for everything else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_help_request() {
            EXIT_SUCCESS
        } else {
            EXIT_USAGE
        }
    }
}
