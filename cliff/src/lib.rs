//! Type-safe command-line flag declarations on top of `clap`.
//!
//! Describe the fields of a configuration struct as named [`Flag`]s, collect
//! them in a [`Flags`] set and get the struct back populated from the process
//! arguments:
//!
//! ```
//! use cliff::{Count, Flags, flag, must_parse};
//!
//! #[derive(Debug, Default)]
//! struct Config {
//!     host: String,
//!     port: u16,
//!     verbosity: Count,
//! }
//!
//! fn flags(c: &mut Config) -> Flags<'_> {
//!     Flags::new()
//!         .flag("host", flag(&mut c.host, "127.0.0.1".into(), "host to serve on"))
//!         .flag("port", flag(&mut c.port, 8080, "port to listen to").short('p'))
//!         .flag("verbose", flag(&mut c.verbosity, Count(0), "more output").short('v'))
//! }
//!
//! let args = ["serve", "-p", "9000", "-vv"];
//! let config = must_parse(&mut std::io::stderr(), |code| std::process::exit(code), args, flags);
//! assert_eq!(config.host, "127.0.0.1");
//! assert_eq!(config.port, 9000);
//! assert_eq!(config.verbosity, Count(2));
//! ```
//!
//! Supported value types are closed under the sealed [`FlagValue`] trait:
//! `bool`, [`Count`], signed and unsigned integers, `f32`, `f64`, `String`,
//! [`Duration`](std::time::Duration), IP addresses, [`ipnet::IpNet`],
//! [`IpMask`], [`BytesHex`], [`BytesBase64`], `Vec<T>` of any [`Element`] and
//! `HashMap`/`BTreeMap` from `String` to any [`Element`]. Other types go
//! through [`func_flag`] or a native [`clap::Arg`] via [`arg_flag`].

mod error;
mod flag;
mod flags;
mod name;
mod parse;
mod value;

pub use error::{
    AggregatedErrors, CliffError, CliffResult, NameRule, Stage, is_display_request,
};
pub use flag::{Flag, arg_flag, flag, func_flag};
pub use flags::Flags;
pub use name::{validate_name, validate_short};
pub use parse::{handle_error, must_parse, parse};
pub use value::{BytesBase64, BytesHex, Count, Element, FlagValue, IpMask, ValueKind};

pub use clap;
pub use ipnet;
