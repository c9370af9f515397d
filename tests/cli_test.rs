use clap::Parser;
use std::ffi::OsString;
use twinstack::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("twinstack")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert!(!parsed.verbose);
}

#[test]
fn test_verbose_flag() {
    let parsed = Args::try_parse_from(make_args(&["--verbose"])).unwrap();
    assert!(parsed.verbose);

    let parsed = Args::try_parse_from(make_args(&["-v"])).unwrap();
    assert!(parsed.verbose);
}

#[test]
fn test_positional_args_rejected() {
    assert!(Args::try_parse_from(make_args(&["@acme/test-app"])).is_err());
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Args::try_parse_from(make_args(&["--force"])).is_err());
}
