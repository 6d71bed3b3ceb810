//! Primary error enum for flag declaration and parsing flows.

use std::fmt;

use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Convenience alias for results produced by this crate.
pub type CliffResult<T> = Result<T, CliffError>;

/// Errors that can occur while declaring, registering or parsing flags.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliffError {
    /// A flag name broke one of the naming rules.
    #[error("invalid flag name '{name}': {rule}")]
    InvalidName {
        /// Offending flag name.
        name: String,
        /// Rule the name failed.
        rule: NameRule,
    },

    /// A shorthand is not a single ASCII alphanumeric character.
    #[error("invalid shorthand '{short}' for flag '{name}': must be an alpha-numeric ASCII character")]
    InvalidShort {
        /// Flag owning the shorthand.
        name: String,
        /// Rejected shorthand.
        short: char,
    },

    /// The bound target cannot hold what the argument yields.
    #[error("flag '{name}' cannot be bound to `{expected}`: {reason}")]
    UnsupportedType {
        /// Flag being bound.
        name: String,
        /// Rust type of the bound target.
        expected: &'static str,
        /// Explanation reported by the binding.
        reason: String,
    },

    /// The flag could not be registered with the underlying command.
    #[error("flag '{name}': {stage}: {message}")]
    Construction {
        /// Flag being registered.
        name: String,
        /// Registration step that failed.
        stage: Stage,
        /// Human-readable explanation.
        message: String,
    },

    /// Error parsing command-line arguments, including help requests.
    #[error("Failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),

    /// Writing notices or usage text to the output stream failed.
    #[error("failed to write to the output stream: {0}")]
    Output(#[from] std::io::Error),

    /// Several flags failed validation at once.
    #[error("multiple flag errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

impl From<clap::Error> for CliffError {
    fn from(e: clap::Error) -> Self {
        Self::CliParsing(Box::new(e))
    }
}

/// Naming rules checked for every flag name, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NameRule {
    /// The name is empty.
    #[error("flag name must not be empty")]
    Empty,
    /// The name contains an upper-case ASCII letter.
    #[error("flag name must be lowercase")]
    Lowercase,
    /// The first character is not ASCII alphanumeric.
    #[error("flag name must start with alpha-numeric ASCII character")]
    LeadingCharacter,
    /// The name contains `--`.
    #[error("flag name must not contain --")]
    DoubleDash,
    /// The name contains `=`.
    #[error("flag name must not contain =")]
    EqualsSign,
    /// The name contains something other than ASCII alphanumerics and dashes.
    #[error("flag name can contain only alpha-numeric ASCII characters and dashes")]
    Characters,
}

/// Registration step reported by [`CliffError::Construction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Stage {
    /// Adding the argument to the command.
    Register,
    /// Applying the deprecation marker.
    MarkDeprecated,
    /// Applying the shorthand deprecation marker.
    MarkShortDeprecated,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Register => "register",
            Self::MarkDeprecated => "mark deprecated",
            Self::MarkShortDeprecated => "mark short deprecated",
        })
    }
}
