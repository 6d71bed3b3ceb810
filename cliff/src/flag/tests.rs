//! Unit tests for flag decoration, validation and registration.

use clap::{Arg, ArgAction, Command};
use rstest::rstest;

use super::{arg_flag, flag, func_flag};
use crate::error::{CliffError, NameRule, Stage};

#[test]
fn decorations_are_recorded() {
    let mut addr = String::new();
    let decorated = flag(&mut addr, String::new(), "")
        .short('a')
        .deprecated("use --host and --port instead")
        .short_deprecated("use --addr")
        .hidden();
    assert_eq!(decorated.shorthand(), Some('a'));
    assert_eq!(decorated.deprecation(), Some("use --host and --port instead"));
    assert_eq!(decorated.short_deprecation(), Some("use --addr"));
    assert!(decorated.is_hidden());
}

#[test]
fn empty_deprecation_messages_leave_the_flag_undecorated() {
    let mut addr = String::new();
    let plain = flag(&mut addr, String::new(), "").deprecated("").short_deprecated("");
    assert_eq!(plain.deprecation(), None);
    assert_eq!(plain.short_deprecation(), None);
}

#[test]
fn valid_flag_has_no_problems() {
    let mut port = 0_u16;
    let port_flag = flag(&mut port, 8080, "port").short('p');
    assert!(port_flag.problems("port").is_empty());
}

#[test]
fn reports_every_problem_of_one_flag() {
    let mut port = 0_u16;
    let broken = flag(&mut port, 8080, "port")
        .short('?')
        .short_deprecated("gone");
    let problems = broken.problems("Port");
    assert_eq!(problems.len(), 2, "unexpected problems: {problems:?}");
    assert!(matches!(
        problems.first(),
        Some(CliffError::InvalidName {
            rule: NameRule::Lowercase,
            ..
        })
    ));
    assert!(matches!(
        problems.get(1),
        Some(CliffError::InvalidShort { short: '?', .. })
    ));
}

#[test]
fn short_deprecation_requires_a_shorthand() {
    let mut port = 0_u16;
    let orphan = flag(&mut port, 8080, "port").short_deprecated("use --port");
    let problems = orphan.problems("port");
    assert!(matches!(
        problems.as_slice(),
        [CliffError::Construction {
            stage: Stage::MarkShortDeprecated,
            ..
        }]
    ));
}

#[rstest]
#[case(ArgAction::Append)]
#[case(ArgAction::Help)]
fn native_args_must_yield_a_single_value(#[case] action: ArgAction) {
    let mut seen = String::new();
    let native = arg_flag(&mut seen, Arg::new("raw").action(action));
    let problems = native.problems("raw");
    assert!(matches!(
        problems.as_slice(),
        [CliffError::UnsupportedType { .. }]
    ));
}

#[test]
fn registration_seeds_the_default() {
    let mut host = String::from("unset");
    {
        let mut host_flag = flag(&mut host, "127.0.0.1".to_owned(), "host");
        let arg = host_flag.register("host");
        assert_eq!(arg.get_long(), Some("host"));
    }
    assert_eq!(host, "127.0.0.1");
}

#[test]
fn registration_appends_default_to_help() {
    let mut port = 0_u16;
    let arg = flag(&mut port, 8080, "port to listen to")
        .short('p')
        .register("port");
    assert_eq!(arg.get_short(), Some('p'));
    assert_eq!(
        arg.get_help().map(ToString::to_string).as_deref(),
        Some("port to listen to (default 8080)")
    );
    assert!(!arg.is_hide_set());
}

#[test]
fn zero_defaults_are_not_advertised() {
    let mut debug = false;
    let arg = flag(&mut debug, false, "run in debug mode").register("debug");
    assert_eq!(
        arg.get_help().map(ToString::to_string).as_deref(),
        Some("run in debug mode")
    );
}

#[test]
fn deprecated_and_hidden_flags_are_hidden() {
    let mut addr = String::new();
    let deprecated = flag(&mut addr, String::new(), "")
        .deprecated("use --host")
        .register("addr");
    assert!(deprecated.is_hide_set());

    let mut secret = String::new();
    let hidden = flag(&mut secret, String::new(), "").hidden().register("secret");
    assert!(hidden.is_hide_set());
}

#[test]
fn deprecated_shorthand_becomes_a_hidden_alias() {
    let mut port = 0_u16;
    let arg = flag(&mut port, 8080, "port")
        .short('P')
        .short_deprecated("use -p")
        .register("port");
    assert_eq!(arg.get_short(), None);
    let matches = Command::new("prog")
        .arg(arg)
        .try_get_matches_from(["prog", "-P", "1"])
        .unwrap();
    assert_eq!(matches.get_one::<u16>("port"), Some(&1));
}

#[test]
fn func_flags_use_the_supplied_parser() {
    let mut pair = (0_u8, 0_u8);
    let parser = |raw: &str| -> Result<(u8, u8), String> {
        let (left, right) = raw.split_once(':').ok_or("expected a:b")?;
        Ok((
            left.parse().map_err(|_| "bad left")?,
            right.parse().map_err(|_| "bad right")?,
        ))
    };
    let mut pair_flag = func_flag(&mut pair, (1, 1), parser, "pair");
    let matches = Command::new("prog")
        .arg(pair_flag.register("pair"))
        .try_get_matches_from(["prog", "--pair", "3:4"])
        .unwrap();
    pair_flag.bind("pair", &matches).unwrap();
    assert_eq!(pair, (3, 4));
}

#[test]
fn debug_output_omits_the_binding() {
    let mut port = 0_u16;
    let rendered = format!("{:?}", flag(&mut port, 1, "port").short('p'));
    assert!(rendered.contains("short: Some('p')"), "{rendered}");
    assert!(rendered.contains("<binding>"), "{rendered}");
}
