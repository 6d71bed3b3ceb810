//! Value types a flag can be bound to and how each maps onto a `clap::Arg`.
//!
//! The set of supported types is closed: [`FlagValue`] is sealed, so a flag
//! declared over any other type fails to compile. Each type reports a
//! [`ValueKind`], and [`configure`] turns that kind into the matching clap
//! action, arity and value parser.

use clap::{Arg, ArgAction};

macro_rules! scalar_value {
    (
        $ty:ty,
        name = $name:expr,
        parse = $parse:expr,
        render = $render:expr,
        default = $default:expr $(,)?
    ) => {
        impl $crate::value::sealed::Sealed for $ty {}

        impl $crate::value::Element for $ty {
            fn type_name() -> &'static str {
                $name
            }

            fn parse_element(raw: &str) -> Result<Self, String> {
                ($parse)(raw)
            }

            fn render(&self) -> String {
                ($render)(self)
            }
        }

        impl $crate::value::FlagValue for $ty {
            const KIND: $crate::value::ValueKind = $crate::value::ValueKind::Scalar;
            type Item = Self;

            fn value_name() -> String {
                $name.to_owned()
            }

            fn parse_item(raw: &str) -> Result<Self, String> {
                <Self as $crate::value::Element>::parse_element(raw)
            }

            fn from_items(items: Vec<Self>) -> Option<Self> {
                items.into_iter().last()
            }

            fn default_text(&self) -> Option<String> {
                ($default)(self)
            }
        }
    };
}

mod bytes;
mod collection;
mod duration;
mod net;
mod primitive;

pub use bytes::{BytesBase64, BytesHex};
pub use net::IpMask;
pub use primitive::Count;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Shape of the command-line argument a value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueKind {
    /// `--flag` sets `true`; `--flag=false` sets an explicit value.
    Switch,
    /// Each occurrence increments the value, so `-vvv` yields 3.
    Counter,
    /// Exactly one value; repeating the flag keeps the last one.
    Scalar,
    /// Comma separated values, accumulated across occurrences.
    List,
    /// Comma separated `key=value` entries, accumulated across occurrences.
    Map,
}

impl ValueKind {
    /// Whether the flag consumes the following argument as its value.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        matches!(self, Self::Scalar | Self::List | Self::Map)
    }
}

/// A type that can be the target of a flag.
///
/// Implemented for the primitive, network, duration and byte types listed in
/// the crate documentation, for `Vec<T>` of any [`Element`] and for string
/// keyed maps of any [`Element`].
pub trait FlagValue: Clone + Send + Sync + 'static + sealed::Sealed {
    /// Argument shape used to parse this value.
    const KIND: ValueKind;

    /// What clap stores for one parsed value.
    type Item: Clone + Send + Sync + 'static;

    /// Placeholder shown for the value in help output.
    fn value_name() -> String;

    /// Parses one raw command-line value.
    ///
    /// # Errors
    ///
    /// Returns a message describing why `raw` is not acceptable.
    fn parse_item(raw: &str) -> Result<Self::Item, String>;

    /// Folds every parsed value of one flag into the final value.
    fn from_items(items: Vec<Self::Item>) -> Option<Self>;

    /// Combines a parsed command-line value with the declared default.
    ///
    /// The parsed value replaces the default unless the type accumulates, as
    /// [`Count`] does.
    #[must_use]
    fn over_default(self, _default: &Self) -> Self {
        self
    }

    /// Text shown as `(default ...)` in help, or `None` for the zero value.
    fn default_text(&self) -> Option<String>;
}

/// A scalar type that can also appear inside list and map flags.
pub trait Element: Clone + Send + Sync + 'static + sealed::Sealed {
    /// Short type name used in help placeholders.
    fn type_name() -> &'static str;

    /// Parses one element.
    ///
    /// # Errors
    ///
    /// Returns a message describing why `raw` is not acceptable.
    fn parse_element(raw: &str) -> Result<Self, String>;

    /// Renders the element the way it would be written on the command line.
    fn render(&self) -> String;
}

/// Applies the action, arity and parser for `T` to `arg`.
pub(crate) fn configure<T: FlagValue>(arg: Arg) -> Arg {
    match T::KIND {
        ValueKind::Switch => arg
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_name(T::value_name())
            .value_parser(T::parse_item),
        ValueKind::Counter => arg.action(ArgAction::Count),
        ValueKind::Scalar => arg
            .action(ArgAction::Set)
            .num_args(1)
            .allow_hyphen_values(true)
            .value_name(T::value_name())
            .value_parser(T::parse_item),
        ValueKind::List | ValueKind::Map => arg
            .action(ArgAction::Append)
            .num_args(1)
            .allow_hyphen_values(true)
            .value_name(T::value_name())
            .value_parser(T::parse_item),
    }
}
