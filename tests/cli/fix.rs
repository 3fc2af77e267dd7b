use anyhow::Result;

use crate::{APP_HTML, CliTest, DE_JSON, EN_JSON, stdout};

fn setup(test: &CliTest) -> Result<()> {
    test.write_file(
        EN_JSON,
        r#"{"HOME": {"TITLE": "Home", "OLD": "Old"}, "LEGACY": {"A": "a"}, "KEPT": "k"}"#,
    )?;
    test.write_file(DE_JSON, r#"{"HOME": {"TITLE": "Start"}, "KEPT": "k"}"#)?;
    test.write_file(
        APP_HTML,
        "<h1 translate>HOME.TITLE</h1>\n<p>{{ 'KEPT' | translate }}</p>\n",
    )
}

#[test]
fn test_fix_removes_zombie_keys() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    let output = test.check_command().arg("--fix-zombies-keys").output()?;
    let out = stdout(&output);

    // The zombies are still reported for this run.
    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("warning: \"HOME.OLD\"  zombie-key"));
    assert!(out.contains("Removed zombie keys from 1 file(s):"));
    assert!(out.contains("  - src/assets/i18n/en.json"));

    assert_eq!(
        test.read_file(EN_JSON)?,
        r#"{
    "HOME": {
        "TITLE": "Home"
    },
    "KEPT": "k"
}
"#
    );
    // No zombies there, so the file is left as written.
    assert_eq!(
        test.read_file(DE_JSON)?,
        r#"{"HOME": {"TITLE": "Start"}, "KEPT": "k"}"#
    );
    Ok(())
}

#[test]
fn test_fix_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.check_command().arg("--fix-zombies-keys").output()?;
    let after_first = test.read_file(EN_JSON)?;

    let output = test.check_command().arg("--fix-zombies-keys").output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(!out.contains("Removed zombie keys"));
    assert_eq!(test.read_file(EN_JSON)?, after_first);
    Ok(())
}

#[test]
fn test_fix_from_config_file() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;
    test.write_file(".keylintrc.json", r#"{ "fixZombiesKeys": true }"#)?;

    test.check_command().output()?;

    assert!(!test.read_file(EN_JSON)?.contains("LEGACY"));
    Ok(())
}

#[test]
fn test_ignored_zombie_keys_are_not_removed() -> Result<()> {
    let test = CliTest::new()?;
    setup(&test)?;

    test.check_command()
        .args(["--fix-zombies-keys", "--ignored-keys", "^legacy"])
        .output()?;

    let en = test.read_file(EN_JSON)?;
    assert!(en.contains("LEGACY"));
    assert!(!en.contains("OLD"));
    Ok(())
}
