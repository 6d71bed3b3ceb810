//! Records the status passed to an exit callback instead of terminating.
//!
//! # Examples
//!
//! ```
//! use cliff_test_helpers::exit::ExitRecorder;
//!
//! let recorder = ExitRecorder::new();
//! (recorder.hook())(2);
//! assert_eq!(recorder.code(), Some(2));
//! ```

use std::cell::Cell;

/// Captures the last exit status handed to [`ExitRecorder::hook`].
#[derive(Debug, Default)]
pub struct ExitRecorder {
    code: Cell<Option<i32>>,
}

impl ExitRecorder {
    /// Creates a recorder that has not seen an exit yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: Cell::new(None),
        }
    }

    /// Returns a callback suitable for `must_parse` and `handle_error`.
    pub fn hook(&self) -> impl FnOnce(i32) + '_ {
        move |code| self.code.set(Some(code))
    }

    /// The recorded status, if the hook was called.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        self.code.get()
    }

    /// Whether the hook was called at all.
    #[must_use]
    pub fn exited(&self) -> bool {
        self.code.get().is_some()
    }
}
