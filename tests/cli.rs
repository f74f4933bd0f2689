use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

use test_case::test_case;

fn sftpsync() -> Command {
    let mut cmd = Command::cargo_bin("sftpsync").unwrap();
    cmd.env_remove("SFTPSYNC_LOG");
    cmd
}


#[test_case(&["-h"] ; "short")]
#[test_case(&["--help"] ; "long")]
#[test_case(&["-q", "-v", "-i", "/nonexistent/path", "--help"] ; "with invalid options")]
#[test_case(&["-h", "--bogus", "-i"] ; "before unparsable tokens")]
#[test_case(&["-h", "-h"] ; "repeated")]
fn help_prints_usage_and_exits_zero(args: &[&str]) {
    sftpsync()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage:\n"))
        .stdout(predicate::str::ends_with("\n\n"))
        .stderr(predicate::str::is_empty());
}

#[test_case(&["-q", "-v", "a", "b"], "pick exactly one" ; "quiet and verbose")]
#[test_case(&["-i", "/nonexistent/path", "a", "b"], "does not exist" ; "missing identity")]
#[test_case(&["-o", "BadKey=value", "a", "b"], "'BadKey'" ; "unsupported ssh option")]
#[test_case(&["-o", "novalue", "a", "b"], "Invalid SSH option" ; "ssh option without separator")]
#[test_case(&["--frobnicate", "a", "b"], "--frobnicate" ; "unknown flag")]
#[test_case(&["a"], "SOURCE and DESTINATION" ; "missing destination")]
#[test_case(&["--bogus", "-h"], "--bogus" ; "unknown flag before help")]
#[test_case(&["-o", "BadKey=x", "-i", "/nonexistent/path", "a", "b"], "'BadKey'" ; "first bad value wins")]
fn failures_print_error_and_usage_then_exit_two(args: &[&str], fragment: &str) {
    sftpsync()
        .args(args)
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("ERROR: "))
        .stderr(predicate::str::contains(fragment))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn success_hands_off_configuration_as_json() {
    let key = NamedTempFile::new().unwrap();

    let output = sftpsync()
        .args(["-fr", "-r", "-i"])
        .arg(key.path())
        .args(["-o", "ProxyCommand nc %h %p", "user@host:/remote", "./local"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["force"], true);
    assert_eq!(json["recursive"], true);
    assert_eq!(json["private_key"], key.path().to_str().unwrap());
    assert_eq!(json["ssh_options"]["ProxyCommand"], "nc %h %p");
    assert_eq!(json["source"], "user@host:/remote");
    assert_eq!(json["destination"], "./local");
}
