use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn gge4() -> Command {
    let mut cmd = Command::new(cargo_bin!("gge4"));
    cmd.env_remove("GGE4_GATEWAY_ID")
        .env_remove("GGE4_PASSWORD")
        .env_remove("GGE4_HMAC_KEY")
        .env_remove("GGE4_KEY_ID");
    cmd
}

fn with_credentials(cmd: &mut Command) -> &mut Command {
    cmd.env("GGE4_GATEWAY_ID", "AD1234-56")
        .env("GGE4_PASSWORD", "secret")
        .env("GGE4_HMAC_KEY", "hmac-key")
        .env("GGE4_KEY_ID", "12345")
}

#[test]
fn test_help_lists_options() {
    gge4()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--gateway-id"))
        .stdout(predicate::str::contains("--type"));
}

#[test]
fn test_missing_credentials_fail() {
    let mut fields = tempfile::NamedTempFile::new().unwrap();
    writeln!(fields, r#"{{"amount": "1.00"}}"#).unwrap();

    gge4()
        .arg(fields.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--gateway-id"));
}

#[test]
fn test_fields_file_must_be_an_object() {
    let mut fields = tempfile::NamedTempFile::new().unwrap();
    writeln!(fields, r#"["amount", "1.00"]"#).unwrap();

    let mut cmd = gge4();
    with_credentials(&mut cmd)
        .arg(fields.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a JSON object of fields"));
}

#[test]
fn test_unreachable_gateway_reports_failure() {
    let mut fields = tempfile::NamedTempFile::new().unwrap();
    writeln!(fields, r#"{{"amount": "1.00", "cc_number": "4111111111111111"}}"#).unwrap();

    let mut cmd = gge4();
    with_credentials(&mut cmd)
        .arg(fields.path())
        .arg("--base-url")
        .arg("http://127.0.0.1:9/transaction/")
        .arg("--timeout")
        .arg("2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction failed"))
        .stderr(predicate::str::contains("secret").not());
}
