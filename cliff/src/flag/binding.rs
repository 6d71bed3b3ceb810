//! How a flag writes into its target.
//!
//! Three bindings exist: [`Typed`] for the closed set of [`FlagValue`] types,
//! [`Parsed`] for caller-supplied parser functions, and [`Native`] for a
//! pre-built `clap::Arg`.

use std::any::type_name;

use clap::parser::{MatchesError, ValueSource};
use clap::{Arg, ArgAction, ArgMatches};

use crate::error::{CliffError, CliffResult};
use crate::value::{self, FlagValue};

pub(crate) trait Binding {
    /// Builds the clap argument for `name` and seeds the target with its
    /// default.
    fn arg(&mut self, name: &str) -> Arg;

    /// Default value rendered for help output.
    fn default_text(&self) -> Option<String>;

    /// Whether the flag consumes the following argument as its value.
    fn takes_value(&self) -> bool;

    /// Rejects bindings clap could register but this crate cannot read back.
    fn check(&self, _name: &str) -> CliffResult<()> {
        Ok(())
    }

    /// Extra short and long spellings the argument answers to.
    fn aliases(&self) -> (Vec<char>, Vec<String>) {
        (Vec::new(), Vec::new())
    }

    /// Copies the parsed value into the target.
    fn bind(self: Box<Self>, name: &str, matches: &ArgMatches) -> CliffResult<()>;
}

fn mismatch<T>(name: &str, err: &MatchesError) -> CliffError {
    CliffError::UnsupportedType {
        name: name.to_owned(),
        expected: type_name::<T>(),
        reason: err.to_string(),
    }
}

fn from_command_line(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

pub(crate) struct Typed<'a, T> {
    pub(crate) target: &'a mut T,
    pub(crate) default: T,
}

impl<T: FlagValue> Binding for Typed<'_, T> {
    fn arg(&mut self, name: &str) -> Arg {
        self.target.clone_from(&self.default);
        value::configure::<T>(Arg::new(name.to_owned()).long(name.to_owned()))
    }

    fn default_text(&self) -> Option<String> {
        self.default.default_text()
    }

    fn takes_value(&self) -> bool {
        T::KIND.takes_value()
    }

    fn bind(self: Box<Self>, name: &str, matches: &ArgMatches) -> CliffResult<()> {
        if !from_command_line(matches, name) {
            return Ok(());
        }
        let items = matches
            .try_get_many::<T::Item>(name)
            .map_err(|err| mismatch::<T>(name, &err))?;
        if let Some(parsed) = items.and_then(|values| T::from_items(values.cloned().collect())) {
            *self.target = parsed.over_default(&self.default);
        }
        Ok(())
    }
}

pub(crate) struct Parsed<'a, T, P> {
    pub(crate) target: &'a mut T,
    pub(crate) default: T,
    pub(crate) parser: P,
}

impl<T, P, E> Binding for Parsed<'_, T, P>
where
    T: Clone + Send + Sync + 'static,
    P: Fn(&str) -> Result<T, E> + Clone + Send + Sync + 'static,
    E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    fn arg(&mut self, name: &str) -> Arg {
        self.target.clone_from(&self.default);
        Arg::new(name.to_owned())
            .long(name.to_owned())
            .action(ArgAction::Set)
            .num_args(1)
            .allow_hyphen_values(true)
            .value_name("value")
            .value_parser(self.parser.clone())
    }

    fn default_text(&self) -> Option<String> {
        None
    }

    fn takes_value(&self) -> bool {
        true
    }

    fn bind(self: Box<Self>, name: &str, matches: &ArgMatches) -> CliffResult<()> {
        if !from_command_line(matches, name) {
            return Ok(());
        }
        if let Some(parsed) = matches
            .try_get_one::<T>(name)
            .map_err(|err| mismatch::<T>(name, &err))?
        {
            self.target.clone_from(parsed);
        }
        Ok(())
    }
}

pub(crate) struct Native<'a, T> {
    pub(crate) target: &'a mut T,
    pub(crate) arg: Arg,
}

impl<T> Binding for Native<'_, T>
where
    T: Clone + Send + Sync + 'static,
{
    fn arg(&mut self, name: &str) -> Arg {
        self.arg
            .clone()
            .id(name.to_owned())
            .long(name.to_owned())
            .short(None::<char>)
    }

    fn default_text(&self) -> Option<String> {
        None
    }

    fn takes_value(&self) -> bool {
        self.arg.get_action().takes_values()
    }

    fn aliases(&self) -> (Vec<char>, Vec<String>) {
        let shorts = self.arg.get_all_short_aliases().unwrap_or_default();
        let longs = self
            .arg
            .get_all_aliases()
            .unwrap_or_default()
            .into_iter()
            .map(str::to_owned)
            .collect();
        (shorts, longs)
    }

    fn check(&self, name: &str) -> CliffResult<()> {
        match self.arg.get_action() {
            ArgAction::Set | ArgAction::SetTrue | ArgAction::SetFalse | ArgAction::Count => Ok(()),
            other => Err(CliffError::UnsupportedType {
                name: name.to_owned(),
                expected: type_name::<T>(),
                reason: format!("action {other:?} does not produce a single value"),
            }),
        }
    }

    fn bind(self: Box<Self>, name: &str, matches: &ArgMatches) -> CliffResult<()> {
        if let Some(parsed) = matches
            .try_get_one::<T>(name)
            .map_err(|err| mismatch::<T>(name, &err))?
        {
            self.target.clone_from(parsed);
        }
        Ok(())
    }
}
