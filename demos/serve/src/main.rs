//! Demo server entry-point: parse flags into a config and print it.

use std::io::{self, Write};

use cliff::{Count, Flags, flag, must_parse};

#[derive(Debug, Default)]
struct Config {
    host: String,
    port: u16,
    debug: bool,
    addr: String,
    verbosity: Count,
}

fn flags(c: &mut Config) -> Flags<'_> {
    Flags::new()
        .flag("host", flag(&mut c.host, "127.0.0.1".into(), "host to serve on"))
        .flag("port", flag(&mut c.port, 8080, "port to listen to").short('p'))
        .flag("debug", flag(&mut c.debug, false, "run in debug mode"))
        .flag(
            "addr",
            flag(&mut c.addr, String::new(), "address to serve on")
                .deprecated("use --host and --port instead"),
        )
        .flag("verbose", flag(&mut c.verbosity, Count(0), "increase output").short('v'))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = must_parse(
        &mut io::stderr(),
        |code| std::process::exit(code),
        std::env::args_os(),
        flags,
    );
    writeln!(io::stdout().lock(), "{config:#?}")?;
    Ok(())
}
