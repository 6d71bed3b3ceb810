//! One-call entry points that build a configuration struct from arguments.

use std::ffi::OsString;
use std::io::Write;

use crate::error::{CliffError, CliffResult};
use crate::flags::Flags;

/// Parses `args` into a fresh `T`.
///
/// `build` declares the flags over the fields of a default-constructed `T`.
/// Usage text requested with `--help` is written to `out`, as are deprecation
/// notices.
///
/// # Errors
///
/// Returns validation, parse and output failures. Pass them to
/// [`handle_error`] to report them and exit with the conventional status.
///
/// # Examples
///
/// ```
/// use cliff::{Flags, flag, parse};
///
/// #[derive(Default)]
/// struct Config {
///     host: String,
///     port: u16,
/// }
///
/// fn flags(c: &mut Config) -> Flags<'_> {
///     Flags::new()
///         .flag("host", flag(&mut c.host, "127.0.0.1".into(), "host to serve on"))
///         .flag("port", flag(&mut c.port, 8080, "port to listen to").short('p'))
/// }
///
/// let config: Config = parse(&mut std::io::stderr(), ["serve", "--host", "localhost"], flags)?;
/// assert_eq!(config.host, "localhost");
/// assert_eq!(config.port, 8080);
/// # Ok::<(), cliff::CliffError>(())
/// ```
pub fn parse<T, F, W, I, S>(out: &mut W, args: I, build: F) -> CliffResult<T>
where
    T: Default,
    F: for<'a> FnOnce(&'a mut T) -> Flags<'a>,
    W: Write + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut config = T::default();
    build(&mut config).parse(out, args)?;
    Ok(config)
}

/// Like [`parse`], but routes any failure through [`handle_error`].
///
/// `exit` is normally `|code| std::process::exit(code)`. If it returns, the
/// configuration is returned as far as it was populated: declared defaults
/// once the set was assembled, untouched `T::default()` values otherwise.
#[must_use]
pub fn must_parse<T, F, W, E, I, S>(out: &mut W, exit: E, args: I, build: F) -> T
where
    T: Default,
    F: for<'a> FnOnce(&'a mut T) -> Flags<'a>,
    W: Write + ?Sized,
    E: FnOnce(i32),
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut config = T::default();
    if let Err(err) = build(&mut config).parse(&mut *out, args) {
        handle_error(out, exit, &err);
    }
    config
}

/// Reports `err` and calls `exit` with the matching status.
///
/// Help requests exit with `0` without further output, since the usage text
/// was already written while parsing. Clap errors are written as clap renders
/// them; other errors as `error: MESSAGE`. Everything except help exits with
/// `2`.
pub fn handle_error<W, E>(out: &mut W, exit: E, err: &CliffError)
where
    W: Write + ?Sized,
    E: FnOnce(i32),
{
    if !err.is_help_request() {
        let written = match err {
            CliffError::CliParsing(clap_err) => write!(out, "{}", clap_err.render()),
            other => writeln!(out, "error: {other}"),
        };
        if let Err(write_err) = written {
            tracing::warn!(error = %write_err, "failed to report flag error");
        }
    }
    exit(err.exit_code());
}
