//! Black-box tests of the `outcome` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn outcome(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("outcome").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("OUTCOME_DEFAULT_LOCALE")
        .env_remove("OUTCOME_MESSAGE_LEVELS")
        .env_remove("OUTCOME_CATALOG")
        .env_remove("OUTCOME_CONFIG");
    cmd
}

fn json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn format_substitutes_tokens() {
    let dir = TempDir::new().unwrap();
    outcome(&dir)
        .args(["format", "Hello {monkey:F1} { BALLS :F2}"])
        .args(["-t", "monkey=9.987654321", "-t", "balls=0.123456789"])
        .assert()
        .success()
        .stdout("Hello 10.0 0.12\n");
}

#[test]
fn format_keeps_template_when_a_token_is_missing() {
    let dir = TempDir::new().unwrap();
    outcome(&dir)
        .args(["format", "Hello {name} {{literal}}", "-t", "other=1"])
        .assert()
        .success()
        .stdout("Hello {name} {{literal}}\n");
}

#[test]
fn message_renders_requested_fields() {
    let dir = TempDir::new().unwrap();
    let output = outcome(&dir)
        .args(["message", "NotFound", "--kind", "not-found", "--locale", "fr"])
        .args(["--levels", "code, LanguageCode", "-t", "type=User", "-t", "id=42"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        json(&output.stdout),
        serde_json::json!({
            "type": "not-found",
            "code": "not-found",
            "languageCode": "fr",
            "content": "Le type \"User\" avec l'identificateur \"42\" n'existe pas.",
        })
    );
}

#[test]
fn message_uses_catalog_from_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("extra.toml"),
        r#"
            [neutral]
            Message_Greeting = "Hello {name}!"

            [locales.es]
            Message_Greeting = "¡Hola {name}!"
        "#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("outcome.toml"),
        r#"
            default_locale = "es"
            catalog = "extra.toml"
        "#,
    )
    .unwrap();

    let output = outcome(&dir)
        .args(["message", "Message_Greeting", "--kind", "information", "-t", "name=Ana"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        json(&output.stdout),
        serde_json::json!({ "type": "information", "content": "¡Hola Ana!" })
    );
}

#[test]
fn message_reports_missing_resource() {
    let dir = TempDir::new().unwrap();
    outcome(&dir)
        .args(["message", "Nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"Missing resource \"Nope\" from resource file: \"outcome-cli\""#,
        ));
}

#[test]
fn validate_reports_failures_with_exit_code() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("sign-up.json");
    std::fs::write(&file, r#"{ "username": "al", "age": 7, "password": "short" }"#).unwrap();

    let output = outcome(&dir)
        .args(["validate"])
        .arg(&file)
        .args(["--levels", "code"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let body = json(&output.stdout);
    let codes: Vec<_> = body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["code"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(
        codes,
        [
            "string-length-range-violation",
            "property-required",
            "value-not-within-inclusive-range",
            "min-string-length-violation",
            "value-invalid",
        ]
    );
    assert!(body.get("data").is_none());
}

#[test]
fn validate_first_error_in_french() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("sign-up.json");
    std::fs::write(&file, "{}").unwrap();

    outcome(&dir)
        .args(["validate"])
        .arg(&file)
        .args(["--locale", "fr", "--first-error"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Le champ « Username » est obligatoire."))
        .stdout(predicate::str::contains("Email").not());
}

#[test]
fn validate_success_prints_data() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("sign-up.json");
    std::fs::write(
        &file,
        r#"{
            "username": "grace",
            "email": "grace@example.com",
            "age": 45,
            "password": "compilers",
            "passwordConfirmation": "compilers",
            "interests": ["cobol"]
        }"#,
    )
    .unwrap();

    let output = outcome(&dir).arg("validate").arg(&file).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        json(&output.stdout),
        serde_json::json!({ "messages": [], "data": { "username": "grace", "interests": 1 } })
    );
}

#[test]
fn invalid_locale_in_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("outcome.toml"), r#"default_locale = "!!""#).unwrap();
    outcome(&dir)
        .args(["format", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("!!"));
}
