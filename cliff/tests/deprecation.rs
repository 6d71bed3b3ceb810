//! Tests for deprecated and hidden flags.

use cliff::{Flags, flag, parse};
use rstest::rstest;
use test_helpers::text::{captured, count_lines, line_containing};

#[derive(Debug, Default)]
struct Config {
    host: String,
    port: i64,
    addr: String,
    verbose: bool,
    label: String,
}

fn flags(c: &mut Config) -> Flags<'_> {
    Flags::new()
        .flag("host", flag(&mut c.host, "127.0.0.1".into(), "host to serve on"))
        .flag("port", flag(&mut c.port, 8080, "port to serve on").short('P'))
        .flag(
            "addr",
            flag(&mut c.addr, "127.0.0.1:8080".into(), "")
                .deprecated("use --host and --port instead"),
        )
        .flag(
            "verbose",
            flag(&mut c.verbose, false, "more output")
                .short('v')
                .short_deprecated("use --verbose instead"),
        )
        .flag("label", flag(&mut c.label, String::new(), "free text").short('l'))
}

#[rstest]
fn deprecated_flag_writes_notice_and_applies_value() {
    let mut out = Vec::new();
    let config = parse(&mut out, ["example", "--addr", "localhost:80"], flags)
        .expect("parse");
    assert_eq!(config.addr, "localhost:80");
    assert_eq!(
        captured(&out),
        "Flag --addr has been deprecated, use --host and --port instead\n"
    );
}

#[rstest]
fn repeated_deprecated_flag_warns_once() {
    let mut out = Vec::new();
    let config = parse(&mut out, ["example", "--addr=a:1", "--addr=b:2"], flags)
        .expect("parse");
    assert_eq!(config.addr, "b:2");
    assert_eq!(count_lines(&captured(&out), "has been deprecated"), 1);
}

#[rstest]
fn unused_deprecated_flag_is_silent() {
    let mut out = Vec::new();
    let config = parse(&mut out, ["example", "--host", "localhost"], flags)
        .expect("parse");
    assert_eq!(config.addr, "127.0.0.1:8080");
    assert!(out.is_empty());
}

#[rstest]
#[case::alone(&["example", "-v"])]
#[case::clustered(&["example", "-vP", "1"])]
fn deprecated_shorthand_writes_notice(#[case] args: &[&str]) {
    let mut out = Vec::new();
    let config = parse(&mut out, args.iter().copied(), flags).expect("parse");
    assert!(config.verbose);
    assert_eq!(
        line_containing(&captured(&out), "shorthand"),
        Some("Flag shorthand -v has been deprecated, use --verbose instead")
    );
}

#[rstest]
fn long_form_of_short_deprecated_flag_is_silent() {
    let mut out = Vec::new();
    let config = parse(&mut out, ["example", "--verbose"], flags)
        .expect("parse");
    assert!(config.verbose);
    assert!(out.is_empty());
}

#[rstest]
fn short_value_is_not_mistaken_for_a_shorthand() {
    let mut out = Vec::new();
    let config = parse(&mut out, ["example", "-l", "-v"], flags)
        .expect("parse");
    assert_eq!(config.label, "-v");
    assert!(!config.verbose);
    assert!(out.is_empty());
}

#[rstest]
fn deprecated_and_hidden_flags_are_left_out_of_help() {
    let mut out = Vec::new();
    let mut secret = String::new();
    let mut name = String::new();
    let err = Flags::new()
        .flag("secret", flag(&mut secret, String::new(), "not for humans").hidden())
        .flag("old-name", flag(&mut name, String::new(), "old").deprecated("use --name"))
        .parse(&mut out, ["example", "--help"])
        .expect_err("help");
    assert!(err.is_help_request());
    let help = captured(&out);
    assert!(!help.contains("--secret"), "{help}");
    assert!(!help.contains("--old-name"), "{help}");
    assert!(help.contains("--help"), "{help}");
}
