//! The [`Flags`] set: validation, registration, parsing and binding.

mod shorthand;

use std::collections::HashSet;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command};

use crate::error::{CliffError, CliffResult, Stage, is_display_request};
use crate::flag::Flag;
use shorthand::{ValueOptions, shorts_used};

const HELP: &str = "help";
const HELP_SHORT: char = 'h';
const FALLBACK_PROGRAM: &str = "app";
// Upper case, so it can never clash with a valid flag name.
const LEFTOVERS: &str = "ARGS";

/// An ordered set of named flags.
///
/// # Examples
///
/// ```
/// use cliff::{Flags, flag};
///
/// let mut host = String::new();
/// let mut port = 0_u16;
/// Flags::new()
///     .flag("host", flag(&mut host, "127.0.0.1".into(), "host to serve on"))
///     .flag("port", flag(&mut port, 8080, "port to listen to").short('p'))
///     .parse(&mut std::io::stderr(), ["serve", "--host", "localhost"])
///     .unwrap();
/// assert_eq!(host, "localhost");
/// assert_eq!(port, 8080);
/// ```
#[derive(Debug, Default)]
pub struct Flags<'a> {
    entries: Vec<(String, Flag<'a>)>,
}

impl<'a> Flags<'a> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a flag and returns the set, for chained declarations.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>, flag: Flag<'a>) -> Self {
        self.insert(name, flag);
        self
    }

    /// Adds a flag. Duplicate names are reported when the set is assembled.
    pub fn insert(&mut self, name: impl Into<String>, flag: Flag<'a>) {
        self.entries.push((name.into(), flag));
    }

    /// Number of flags in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no flags.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flag names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Checks every flag without registering anything.
    ///
    /// # Errors
    ///
    /// Returns the single failure found, or [`CliffError::Aggregate`] listing
    /// all of them.
    pub fn validate(&self) -> CliffResult<()> {
        self.validate_against(&Command::new(FALLBACK_PROGRAM).disable_help_flag(true))
    }

    /// Registers every flag on an existing command.
    ///
    /// Targets receive their defaults. Names and shorts already used by
    /// `command`, including its generated help flag, are rejected. Parse the
    /// command yourself and finish with [`Flags::bind`].
    ///
    /// # Errors
    ///
    /// Returns validation failures before touching any target.
    pub fn augment(&mut self, command: Command) -> CliffResult<Command> {
        self.validate_against(&command)?;
        let mut augmented = command;
        for (name, flag) in &mut self.entries {
            tracing::debug!(flag = %name, short = ?flag.shorthand(), "registering flag");
            augmented = augmented.arg(flag.register(name));
        }
        Ok(augmented)
    }

    /// Builds a standalone command named `name` holding every flag and a help
    /// flag.
    ///
    /// Arguments that are not flags are accepted and collected, so they can
    /// be read back with [`Flags::leftovers`].
    ///
    /// No help flag is added when the set defines `help` itself, and help is
    /// only reachable as `--help` when a flag claims `-h`.
    ///
    /// # Errors
    ///
    /// Returns validation failures before touching any target.
    pub fn command(&mut self, name: impl Into<String>) -> CliffResult<Command> {
        let base = Command::new(name.into())
            .disable_help_flag(true)
            .args_override_self(true)
            .color(ColorChoice::Never);
        let command = self.augment(base)?.arg(leftovers_arg());
        Ok(match self.help_arg() {
            Some(help) => command.arg(help),
            None => command,
        })
    }

    /// Writes deprecation notices to `out` and copies parsed values into the
    /// targets.
    ///
    /// `args` is the raw argument list given to the parser, binary name
    /// first; it is only used to tell shorthand use from long use.
    ///
    /// # Errors
    ///
    /// Fails when `out` cannot be written or a target type does not match the
    /// parsed value.
    pub fn bind<W>(self, args: &[OsString], matches: &ArgMatches, out: &mut W) -> CliffResult<()>
    where
        W: Write + ?Sized,
    {
        let used = shorts_used(args, &self.value_options());
        for (name, flag) in self.entries {
            flag.write_notices(&name, matches, &used, &mut *out)?;
            flag.bind(&name, matches)?;
        }
        Ok(())
    }

    /// Non-flag arguments collected by a command built with
    /// [`Flags::command`], in the order they appeared.
    #[must_use]
    pub fn leftovers(matches: &ArgMatches) -> Vec<OsString> {
        matches
            .try_get_many::<OsString>(LEFTOVERS)
            .ok()
            .flatten()
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    /// Parses `args` (binary name first), populates every target and returns
    /// the arguments that are not flags.
    ///
    /// Help requests write usage text to `out` and return an error for which
    /// [`CliffError::is_help_request`] holds.
    ///
    /// # Errors
    ///
    /// Returns validation failures, clap parse failures or output failures.
    pub fn parse<W, I, S>(mut self, out: &mut W, args: I) -> CliffResult<Vec<OsString>>
    where
        W: Write + ?Sized,
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let command = self.command(program_name(&args))?;
        let matches = match command.try_get_matches_from(&args) {
            Ok(matches) => matches,
            Err(err) => {
                if is_display_request(&err) {
                    write!(out, "{}", err.render())?;
                }
                return Err(err.into());
            }
        };
        self.bind(&args, &matches, out)?;
        Ok(Self::leftovers(&matches))
    }

    fn validate_against(&self, command: &Command) -> CliffResult<()> {
        let mut problems = Vec::new();
        let mut names: HashSet<String> = HashSet::new();
        let mut shorts: HashSet<char> = HashSet::new();
        let taken = Taken::from_command(command);
        for (name, flag) in &self.entries {
            problems.extend(flag.problems(name));
            let (flag_shorts, flag_longs) = flag.spellings(name);
            for long in flag_longs {
                if taken.longs.contains(&long) || !names.insert(long.clone()) {
                    problems.push(redefined(name, format!("flag redefined: {long}")));
                }
            }
            for short in flag_shorts {
                if taken.shorts.contains(&short) || !shorts.insert(short) {
                    problems.push(redefined(
                        name,
                        format!("unable to redefine shorthand -{short}"),
                    ));
                }
            }
        }
        CliffError::try_aggregate(problems).map_or(Ok(()), Err)
    }

    fn help_arg(&self) -> Option<Arg> {
        if self.names().any(|name| name == HELP) {
            return None;
        }
        let help = Arg::new(HELP)
            .long(HELP)
            .action(ArgAction::Help)
            .help("Print help");
        let short_taken = self
            .entries
            .iter()
            .any(|(_, flag)| flag.shorthand() == Some(HELP_SHORT));
        Some(if short_taken {
            help
        } else {
            help.short(HELP_SHORT)
        })
    }

    fn value_options(&self) -> ValueOptions {
        let mut options = ValueOptions::default();
        for (name, flag) in self.entries.iter().filter(|(_, flag)| flag.takes_value()) {
            options.longs.insert(name.clone());
            options.shorts.extend(flag.shorthand());
        }
        options
    }
}

impl<'a, K: Into<String>> FromIterator<(K, Flag<'a>)> for Flags<'a> {
    fn from_iter<I: IntoIterator<Item = (K, Flag<'a>)>>(iter: I) -> Self {
        let mut flags = Self::new();
        for (name, flag) in iter {
            flags.insert(name, flag);
        }
        flags
    }
}

impl<'a, K: Into<String>> Extend<(K, Flag<'a>)> for Flags<'a> {
    fn extend<I: IntoIterator<Item = (K, Flag<'a>)>>(&mut self, iter: I) {
        for (name, flag) in iter {
            self.insert(name, flag);
        }
    }
}

/// Names and shorts already claimed by a command.
struct Taken {
    longs: HashSet<String>,
    shorts: HashSet<char>,
}

impl Taken {
    fn from_command(command: &Command) -> Self {
        let mut longs: HashSet<String> = HashSet::new();
        let mut shorts: HashSet<char> = HashSet::new();
        for arg in command.get_arguments() {
            longs.insert(arg.get_id().as_str().to_owned());
            longs.extend(arg.get_long().map(str::to_owned));
            longs.extend(
                arg.get_all_aliases()
                    .unwrap_or_default()
                    .into_iter()
                    .map(str::to_owned),
            );
            shorts.extend(arg.get_short());
            shorts.extend(arg.get_all_short_aliases().unwrap_or_default());
        }
        if !command.is_disable_help_flag_set() {
            longs.insert(HELP.to_owned());
            shorts.insert(HELP_SHORT);
        }
        if command.get_version().is_some() && !command.is_disable_version_flag_set() {
            longs.insert("version".to_owned());
            shorts.insert('V');
        }
        Self { longs, shorts }
    }
}

fn leftovers_arg() -> Arg {
    Arg::new(LEFTOVERS)
        .num_args(1..)
        .action(ArgAction::Append)
        .value_parser(clap::value_parser!(OsString))
        .hide(true)
}

fn redefined(name: &str, message: String) -> CliffError {
    CliffError::Construction {
        name: name.to_owned(),
        stage: Stage::Register,
        message,
    }
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg| Path::new(arg).file_name())
        .map_or_else(
            || FALLBACK_PROGRAM.to_owned(),
            |name| name.to_string_lossy().into_owned(),
        )
}

#[cfg(test)]
mod tests;
