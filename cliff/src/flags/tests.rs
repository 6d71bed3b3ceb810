//! Unit tests for flag set assembly.

use std::ffi::OsString;

use clap::{Arg, ArgAction, Command};
use rstest::rstest;

use super::{Flags, program_name};
use crate::error::{CliffError, Stage};
use crate::flag::{arg_flag, flag};

#[test]
fn keeps_declaration_order() {
    let (mut a, mut b, mut c) = (0_i32, 0_i32, 0_i32);
    let flags: Flags<'_> = [
        ("zeta", flag(&mut a, 0, "")),
        ("alpha", flag(&mut b, 0, "")),
        ("mid", flag(&mut c, 0, "")),
    ]
    .into_iter()
    .collect();
    assert_eq!(flags.len(), 3);
    assert!(!flags.is_empty());
    assert_eq!(flags.names().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
}

#[test]
fn empty_set_is_valid() {
    let flags = Flags::new();
    assert!(flags.is_empty());
    assert!(flags.validate().is_ok());
}

#[test]
fn duplicate_names_are_rejected() {
    let (mut a, mut b) = (String::new(), String::new());
    let flags = Flags::new()
        .flag("host", flag(&mut a, String::new(), ""))
        .flag("host", flag(&mut b, String::new(), ""));
    match flags.validate() {
        Err(CliffError::Construction {
            name,
            stage: Stage::Register,
            message,
        }) => {
            assert_eq!(name, "host");
            assert_eq!(message, "flag redefined: host");
        }
        other => panic!("expected Construction, got {other:?}"),
    }
}

#[test]
fn duplicate_shorts_are_rejected() {
    let (mut a, mut b) = (0_u16, 0_u16);
    let flags = Flags::new()
        .flag("port", flag(&mut a, 0, "").short('p'))
        .flag("peer", flag(&mut b, 0, "").short('p'));
    let err = flags.validate().unwrap_err();
    assert!(err.to_string().contains("unable to redefine shorthand -p"), "{err}");
}

#[test]
fn every_failure_is_aggregated() {
    let (mut a, mut b, mut c) = (0_u16, 0_u16, 0_u16);
    let flags = Flags::new()
        .flag("Port", flag(&mut a, 0, ""))
        .flag("", flag(&mut b, 0, ""))
        .flag("ok", flag(&mut c, 0, "").short('!'));
    match flags.validate() {
        Err(CliffError::Aggregate(aggregate)) => assert_eq!(aggregate.len(), 3),
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn validation_failures_leave_targets_untouched() {
    let mut port = 1_u16;
    let mut flags = Flags::new().flag("Port", flag(&mut port, 8080, ""));
    assert!(flags.command("prog").is_err());
    drop(flags);
    assert_eq!(port, 1);
}

#[test]
fn command_adds_a_help_flag() {
    let mut port = 0_u16;
    let mut flags = Flags::new().flag("port", flag(&mut port, 0, "").short('p'));
    let command = flags.command("prog").unwrap();
    let help = command.get_arguments().find(|arg| arg.get_id().as_str() == "help");
    assert_eq!(help.and_then(Arg::get_short), Some('h'));
}

#[test]
fn help_drops_its_short_when_a_flag_claims_it() {
    let mut host = String::new();
    let mut flags = Flags::new().flag("host", flag(&mut host, String::new(), "").short('h'));
    let command = flags.command("prog").unwrap();
    let help = command
        .get_arguments()
        .find(|arg| arg.get_id().as_str() == "help")
        .unwrap();
    assert_eq!(help.get_short(), None);
    assert_eq!(help.get_long(), Some("help"));
}

#[test]
fn user_defined_help_replaces_the_help_flag() {
    let mut help = false;
    let mut flags = Flags::new().flag("help", flag(&mut help, false, "custom help"));
    let command = flags.command("prog").unwrap();
    let helps: Vec<_> = command
        .get_arguments()
        .filter(|arg| arg.get_id().as_str() == "help")
        .collect();
    assert_eq!(helps.len(), 1);
}

#[rstest]
#[case::generated_help_long("help", None)]
#[case::generated_help_short("verbose", Some('h'))]
#[case::existing_long("output", None)]
#[case::existing_short("level", Some('o'))]
fn augment_rejects_names_claimed_by_the_command(
    #[case] name: &str,
    #[case] short: Option<char>,
) {
    let base = Command::new("prog").arg(Arg::new("output").long("output").short('o'));
    let mut value = String::new();
    let declared = flag(&mut value, String::new(), "");
    let declared = match short {
        Some(c) => declared.short(c),
        None => declared,
    };
    let mut flags = Flags::new().flag(name, declared);
    let err = flags.augment(base).unwrap_err();
    assert!(
        matches!(err, CliffError::Construction { stage: Stage::Register, .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn augment_keeps_existing_arguments() {
    let base = Command::new("prog").arg(Arg::new("output").long("output"));
    let mut level = 0_u8;
    let mut flags = Flags::new().flag("level", flag(&mut level, 3, ""));
    let command = flags.augment(base).unwrap();
    let ids: Vec<&str> = command.get_arguments().map(|arg| arg.get_id().as_str()).collect();
    assert_eq!(ids, ["output", "level"]);
    drop(flags);
    assert_eq!(level, 3);
}

#[rstest]
#[case(&["/usr/local/bin/serve", "--x"], "serve")]
#[case(&["serve"], "serve")]
#[case(&[], "app")]
fn derives_program_name_from_first_argument(#[case] args: &[&str], #[case] expected: &str) {
    let owned: Vec<OsString> = args.iter().map(OsString::from).collect();
    assert_eq!(program_name(&owned), expected);
}

#[rstest]
#[case::trailing(&["example", "--host", "localhost", "extra"], &["extra"])]
#[case::leading(&["example", "file.txt", "--host", "localhost"], &["file.txt"])]
#[case::after_separator(&["example", "--host", "localhost", "--", "--port"], &["--port"])]
#[case::none(&["example", "--host", "localhost"], &[])]
fn parse_returns_arguments_that_are_not_flags(
    #[case] args: &[&str],
    #[case] expected: &[&str],
) {
    let mut host = String::new();
    let leftovers = Flags::new()
        .flag("host", flag(&mut host, "127.0.0.1".to_owned(), ""))
        .parse(&mut std::io::sink(), args.iter().copied())
        .unwrap();
    assert_eq!(host, "localhost");
    let expected: Vec<OsString> = expected.iter().map(OsString::from).collect();
    assert_eq!(leftovers, expected);
}

#[test]
fn native_shorts_give_way_to_the_declared_short() {
    let (mut debug, mut port) = (false, 0_u16);
    Flags::new()
        .flag(
            "debug",
            arg_flag(&mut debug, Arg::new("x").short('p').action(ArgAction::SetTrue)),
        )
        .flag("port", flag(&mut port, 0, "").short('p'))
        .parse(&mut std::io::sink(), ["example", "-p", "1"])
        .unwrap();
    assert!(!debug);
    assert_eq!(port, 1);
}

#[rstest]
#[case::short_alias(Arg::new("x").action(ArgAction::SetTrue).short_alias('p'))]
#[case::long_alias(Arg::new("x").action(ArgAction::SetTrue).alias("port"))]
fn native_aliases_are_checked_for_collisions(#[case] native: Arg) {
    let (mut debug, mut port) = (false, 0_u16);
    let flags = Flags::new()
        .flag("debug", arg_flag(&mut debug, native))
        .flag("port", flag(&mut port, 0, "").short('p'));
    let err = flags.validate().unwrap_err();
    assert!(
        matches!(err, CliffError::Construction { stage: Stage::Register, .. }),
        "unexpected error: {err:?}"
    );
}
