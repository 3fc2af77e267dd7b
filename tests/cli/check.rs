use anyhow::Result;
use serde_json::Value;

use crate::{APP_HTML, CliTest, DE_JSON, EN_JSON, stderr, stdout};

const EN: &str = r#"{
    "GREETING": "hi",
    "UNUSED": "x",
    "BLANK": ""
}"#;

const VIEW: &str = r#"<h1>{{ 'GREETING' | translate }}</h1>
<p translate>BLANK</p>
"#;

fn setup(test: &CliTest) -> Result<()> {
    test.write_file(EN_JSON, EN)?;
    test.write_file(APP_HTML, VIEW)
}

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(EN_JSON, r#"{"HOME": {"TITLE": "Home"}}"#)?;
    test.write_file(APP_HTML, r#"<h1 translate>HOME.TITLE</h1>"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("No translation key problems found"));
    Ok(())
}

#[test]
fn test_check_reports_zombie_and_empty_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    // Default warning budget is 0, so any warning fails.
    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("warning: \"UNUSED\"  zombie-key"));
    assert!(out.contains("--> src/assets/i18n/en.json:3:1"));
    assert!(out.contains("warning: \"BLANK\"  empty-key"));
    assert!(!out.contains("key-on-view"));
    assert!(out.contains("2 problems (0 errors, 2 warnings)"));
    assert!(out.contains("(exceeded)"));
    Ok(())
}

#[test]
fn test_check_within_warning_budget() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test.check_command().args(["--max-warning", "2"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("warning budget: 2 of 2 allowed"));
    Ok(())
}

#[test]
fn test_check_absent_key_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(EN_JSON, r#"{"A": "a"}"#)?;
    test.write_file(DE_JSON, r#"{"A": "a", "ONLY_DE": "b"}"#)?;
    test.write_file(
        APP_HTML,
        "<p translate>A</p>\n<span translate>ONLY_DE</span>\n<b>{{ \"MISSING.KEY\" | translate }}</b>\n",
    )?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("error: \"ONLY_DE\"  key-on-view"));
    assert!(out.contains("--> src/app/app.component.html:2:17"));
    assert!(out.contains("note: missing in: src/assets/i18n/en.json"));
    assert!(out.contains("error: \"MISSING.KEY\"  key-on-view"));
    assert!(out.contains("missing in: src/assets/i18n/de.json, src/assets/i18n/en.json"));
    Ok(())
}

#[test]
fn test_check_misprint_suggestion() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(EN_JSON, r#"{"WELCOME.MESSAGE": "Welcome"}"#)?;
    test.write_file(APP_HTML, r#"<h1>{{ 'WELCOME.MESSAGEE' | translate }}</h1>"#)?;

    let output = test
        .check_command()
        .args(["--misprint-keys", "warning"])
        .output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("warning: \"WELCOME.MESSAGE\"  zombie-key"));
    assert!(out.contains("error: \"WELCOME.MESSAGEE\"  key-on-view"));
    assert!(out.contains("warning: \"WELCOME.MESSAGEE\"  misprint-key"));
    assert!(out.contains("did you mean: WELCOME.MESSAGE"));
    Ok(())
}

#[test]
fn test_check_config_file_and_cli_override() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(
        ".keylintrc.json",
        r#"{ "rules": { "zombieKeys": "disable", "emptyKeys": "disable" } }"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let output = test.check_command().args(["-z", "error"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("error: \"UNUSED\"  zombie-key"));
    Ok(())
}

#[test]
fn test_check_flat_config_file() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(
        ".keylintrc.json",
        r#"{ "zombieKeys": "disable", "emptyKeys": "disable" }"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    Ok(())
}

#[test]
fn test_check_unknown_config_field() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(".keylintrc.json", r#"{ "zombieKey": "error" }"#)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_check_ignored_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .check_command()
        .args(["--ignored-keys", "^unused$,blank"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_check_ignored_paths() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file("src/app/legacy/old.html", r#"<p translate>LEGACY</p>"#)?;

    let output = test
        .check_command()
        .args(["-i", "./src/app/legacy", "-z", "disable", "--empty-keys", "disable"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));
    Ok(())
}

#[test]
fn test_check_json_output() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test.check_command().args(["--format", "json"]).output()?;
    let report: Value = serde_json::from_str(&stdout(&output))?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(report["summary"]["warnings"], 2);
    assert_eq!(report["summary"]["counts"]["zombieKeys"], 1);
    assert_eq!(report["summary"]["counts"]["emptyKeys"], 1);
    assert_eq!(report["diagnostics"][0]["key"], "UNUSED");
    assert_eq!(report["diagnostics"][0]["sourceFile"], EN_JSON);
    Ok(())
}

#[test]
fn test_check_invalid_language_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(EN_JSON, "{ \"A\": ")?;
    test.write_file(APP_HTML, "")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("src/assets/i18n/en.json"));
    Ok(())
}

#[test]
fn test_check_empty_project_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().args(["-p", ""]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Path to project is missing"));
    Ok(())
}

#[test]
fn test_check_invalid_config_field() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(".keylintrc.json", r#"{ "rules": { "zombieKey": "error" } }"#)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_check_invalid_coefficient() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test
        .check_command()
        .args(["--misprint-coefficient", "2"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("misprintCoefficient"));
    Ok(())
}

#[test]
fn test_check_deep_search() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(EN_JSON, r#"{"MENU.HOME": "Home"}"#)?;
    test.write_file(
        "src/app/menu.ts",
        "export const items = [{ label: 'MENU.HOME' }];\n",
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let output = test
        .check_command()
        .args(["--deep-search", "enable"])
        .output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
