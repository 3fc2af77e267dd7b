use anyhow::Result;
use serde_json::Value;

use crate::{APP_HTML, CliTest, DE_JSON, EN_JSON, stderr, stdout};

#[test]
fn test_keys_lists_languages_and_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(EN_JSON, r#"{"HOME": {"TITLE": "Home"}, "ONLY_EN": "x"}"#)?;
    test.write_file(DE_JSON, r#"{"HOME": {"TITLE": "Start"}}"#)?;
    test.write_file(APP_HTML, r#"<h1 translate>HOME.TITLE</h1>"#)?;

    let output = test.keys_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let json: Value = serde_json::from_str(&stdout(&output))?;

    let languages = json["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 2);
    assert_eq!(languages[0]["name"], "de");
    assert_eq!(languages[1]["name"], "en");
    assert_eq!(languages[1]["keys"][1], "ONLY_EN");

    let keys = json["keys"].as_array().unwrap();
    let title = keys.iter().find(|k| k["name"] == "HOME.TITLE").unwrap();
    assert_eq!(title["declarations"].as_array().unwrap().len(), 2);
    assert_eq!(title["viewLocations"][0], APP_HTML);

    let only_en = keys.iter().find(|k| k["name"] == "ONLY_EN").unwrap();
    assert_eq!(only_en["declarations"][0]["value"], "x");
    assert!(only_en["viewLocations"].as_array().unwrap().is_empty());
    Ok(())
}

#[test]
fn test_keys_invalid_language_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(EN_JSON, "[")?;

    let output = test.keys_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
