use anyhow::{Context, Result};
use serde_json::Value;

use crate::{APP_HTML, CliTest, EN_JSON, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .keylintrc.json"));

    let content = test.read_file(".keylintrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;

    assert_eq!(parsed["project"], "./src/app/**/*.{html,ts}");
    assert_eq!(parsed["languages"], "./src/assets/i18n/*.json");
    assert_eq!(parsed["rules"]["zombieKeys"], "warning");
    assert_eq!(parsed["rules"]["keysOnViews"], "error");
    assert_eq!(parsed["rules"]["misprintKeys"], "disable");
    assert_eq!(parsed["rules"]["maxWarning"], 0);
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keylintrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".keylintrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;

    test.write_file(EN_JSON, r#"{"TITLE": "Title"}"#)?;
    test.write_file(APP_HTML, r#"<h1 translate>TITLE</h1>"#)?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join(".keylintrc.json").exists());
    Ok(())
}
