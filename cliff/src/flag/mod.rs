//! Flag descriptors.
//!
//! A [`Flag`] binds one target location to a command-line option. The flag
//! name is not part of the descriptor: it is supplied when the flag is added
//! to a [`Flags`](crate::Flags) set.

mod binding;

use std::collections::HashSet;
use std::fmt;
use std::io::Write;

use clap::parser::ValueSource;
use clap::{Arg, ArgMatches};

use crate::error::{CliffError, CliffResult, Stage};
use crate::name::{validate_name, validate_short};
use crate::value::FlagValue;
use binding::{Binding, Native, Parsed, Typed};

/// A typed command-line flag bound to a target location.
///
/// Build one with [`flag`], [`func_flag`] or [`arg_flag`], then decorate it
/// with [`short`](Self::short), [`deprecated`](Self::deprecated),
/// [`short_deprecated`](Self::short_deprecated) and [`hidden`](Self::hidden).
pub struct Flag<'a> {
    short: Option<char>,
    help: String,
    deprecated: Option<String>,
    short_deprecated: Option<String>,
    hidden: bool,
    binding: Box<dyn Binding + 'a>,
}

/// Declares a flag writing a [`FlagValue`] into `target`.
///
/// `target` receives `default` when the flag set is assembled and the parsed
/// value when the flag appears on the command line.
///
/// # Examples
///
/// ```
/// use cliff::{Flags, flag};
///
/// let mut port = 0_u16;
/// Flags::new()
///     .flag("port", flag(&mut port, 8080, "port to listen to").short('p'))
///     .parse(&mut std::io::sink(), ["serve", "-p", "9000"])
///     .unwrap();
/// assert_eq!(port, 9000);
/// ```
#[must_use]
pub fn flag<'a, T: FlagValue>(target: &'a mut T, default: T, help: impl Into<String>) -> Flag<'a> {
    Flag::with_binding(help.into(), Box::new(Typed { target, default }))
}

/// Declares a single-valued flag parsed by `parser`.
///
/// Use this for types outside the built-in set, such as structured values
/// passed as JSON.
#[must_use]
pub fn func_flag<'a, T, P, E>(
    target: &'a mut T,
    default: T,
    parser: P,
    help: impl Into<String>,
) -> Flag<'a>
where
    T: Clone + Send + Sync + 'static,
    P: Fn(&str) -> Result<T, E> + Clone + Send + Sync + 'static,
    E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    Flag::with_binding(
        help.into(),
        Box::new(Parsed {
            target,
            default,
            parser,
        }),
    )
}

/// Adopts a pre-built [`clap::Arg`] as a flag writing into `target`.
///
/// The argument is renamed to the flag name when added to a set, and its own
/// help text and default value are kept. Any short it carries is dropped in
/// favour of [`Flag::short`]. `target` receives whatever value the
/// argument yields, so its type must match the argument's value parser:
/// `bool` for `SetTrue`, `u8` for `Count`, `String` for an unconfigured `Set`.
#[must_use]
pub fn arg_flag<T>(target: &mut T, arg: Arg) -> Flag<'_>
where
    T: Clone + Send + Sync + 'static,
{
    Flag::with_binding(String::new(), Box::new(Native { target, arg }))
}

impl<'a> Flag<'a> {
    fn with_binding(help: String, binding: Box<dyn Binding + 'a>) -> Self {
        Self {
            short: None,
            help,
            deprecated: None,
            short_deprecated: None,
            hidden: false,
            binding,
        }
    }

    /// Sets the single-character alias, used as `-c`.
    #[must_use]
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Marks the flag as deprecated.
    ///
    /// The flag keeps working but disappears from help, and using it writes
    /// `Flag --NAME has been deprecated, MESSAGE` to the output stream. An
    /// empty message leaves the flag undecorated.
    #[must_use]
    pub fn deprecated(mut self, message: impl Into<String>) -> Self {
        self.deprecated = non_empty(message.into());
        self
    }

    /// Marks only the shorthand as deprecated.
    ///
    /// The short form keeps working but is omitted from help, and using it
    /// writes `Flag shorthand -C has been deprecated, MESSAGE`.
    #[must_use]
    pub fn short_deprecated(mut self, message: impl Into<String>) -> Self {
        self.short_deprecated = non_empty(message.into());
        self
    }

    /// Hides the flag from help output.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// The single-character alias, if any.
    #[must_use]
    pub const fn shorthand(&self) -> Option<char> {
        self.short
    }

    /// The deprecation message, if any.
    #[must_use]
    pub fn deprecation(&self) -> Option<&str> {
        self.deprecated.as_deref()
    }

    /// The shorthand deprecation message, if any.
    #[must_use]
    pub fn short_deprecation(&self) -> Option<&str> {
        self.short_deprecated.as_deref()
    }

    /// Whether the flag is left out of help output.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn takes_value(&self) -> bool {
        self.binding.takes_value()
    }

    /// Every short and long spelling the flag answers to under `name`.
    pub(crate) fn spellings(&self, name: &str) -> (Vec<char>, Vec<String>) {
        let (mut shorts, mut longs) = self.binding.aliases();
        shorts.extend(self.short);
        longs.insert(0, name.to_owned());
        (shorts, longs)
    }

    /// Collects every problem with this flag under `name`.
    pub(crate) fn problems(&self, name: &str) -> Vec<CliffError> {
        let mut problems = Vec::new();
        if let Err(err) = validate_name(name) {
            problems.push(err);
        }
        if let Some(short) = self.short {
            if let Err(err) = validate_short(name, short) {
                problems.push(err);
            }
        }
        if let Err(err) = self.binding.check(name) {
            problems.push(err);
        }
        if self.short_deprecated.is_some() && self.short.is_none() {
            problems.push(CliffError::Construction {
                name: name.to_owned(),
                stage: Stage::MarkShortDeprecated,
                message: "flag has no shorthand".to_owned(),
            });
        }
        problems
    }

    /// Builds the decorated clap argument and seeds the target default.
    pub(crate) fn register(&mut self, name: &str) -> Arg {
        let mut arg = self.binding.arg(name);
        if let Some(short) = self.short {
            arg = if self.short_deprecated.is_some() {
                arg.short_alias(short)
            } else {
                arg.short(short)
            };
        }
        if let Some(help) = self.help_text() {
            arg = arg.help(help);
        }
        if self.hidden || self.deprecated.is_some() {
            arg = arg.hide(true);
        }
        arg
    }

    fn help_text(&self) -> Option<String> {
        match (self.help.is_empty(), self.binding.default_text()) {
            (true, None) => None,
            (false, None) => Some(self.help.clone()),
            (true, Some(default)) => Some(format!("(default {default})")),
            (false, Some(default)) => Some(format!("{} (default {default})", self.help)),
        }
    }

    /// Writes deprecation notices for a flag used on the command line.
    pub(crate) fn write_notices<W>(
        &self,
        name: &str,
        matches: &ArgMatches,
        used_shorts: &HashSet<char>,
        out: &mut W,
    ) -> CliffResult<()>
    where
        W: Write + ?Sized,
    {
        if matches.value_source(name) != Some(ValueSource::CommandLine) {
            return Ok(());
        }
        if let Some(message) = &self.deprecated {
            tracing::warn!(flag = %name, "deprecated flag used");
            writeln!(out, "Flag --{name} has been deprecated, {message}")?;
        }
        if let (Some(message), Some(short)) = (&self.short_deprecated, self.short) {
            if used_shorts.contains(&short) {
                tracing::warn!(flag = %name, %short, "deprecated shorthand used");
                writeln!(out, "Flag shorthand -{short} has been deprecated, {message}")?;
            }
        }
        Ok(())
    }

    pub(crate) fn bind(self, name: &str, matches: &ArgMatches) -> CliffResult<()> {
        tracing::debug!(flag = %name, "binding flag");
        self.binding.bind(name, matches)
    }
}

fn non_empty(message: String) -> Option<String> {
    (!message.is_empty()).then_some(message)
}

impl fmt::Debug for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("short", &self.short)
            .field("help", &self.help)
            .field("deprecated", &self.deprecated)
            .field("short_deprecated", &self.short_deprecated)
            .field("hidden", &self.hidden)
            .field("binding", &"<binding>")
            .finish()
    }
}

#[cfg(test)]
mod tests;
