//! Assertions over the CLI's plain and JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the rendered page shows these section headings, in this order.
pub fn assert_section_order(stdout: &str, headings: &[&str]) -> Result<()> {
    let mut last = 0;
    for heading in headings {
        let position = stdout[last..]
            .find(heading)
            .with_context(|| format!("Section '{}' missing or out of order", heading))?;
        last += position + heading.len();
    }
    Ok(())
}

/// Assert the JSON page carries the given `state` tag.
pub fn assert_page_state(json: &Value, expected: &str) -> Result<()> {
    let state = json["content"]["state"]
        .as_str()
        .context("Expected 'content.state' string in JSON")?;

    if state != expected {
        anyhow::bail!("Expected page state {}, got {}", expected, state);
    }

    Ok(())
}

/// Assert which sections the JSON page carries; the rest must be null.
pub fn assert_sections_present(json: &Value, expected: &[&str]) -> Result<()> {
    let page = json
        .get("content")
        .context("Expected 'content' object in JSON")?;

    for section in ["listing", "item", "source_item", "lodging"] {
        let present = !page[section].is_null();
        let wanted = expected.contains(&section);
        if present != wanted {
            anyhow::bail!(
                "Section '{}' expected {}, but it is {}",
                section,
                if wanted { "present" } else { "absent" },
                if present { "present" } else { "absent" }
            );
        }
    }

    Ok(())
}

/// Assert every key appears exactly once, in the given order.
pub fn assert_keys_once_in_order(stdout: &str, keys: &[&str]) -> Result<()> {
    for key in keys {
        let count = stdout.matches(key).count();
        if count != 1 {
            anyhow::bail!("Expected key '{}' once, found {} times", key, count);
        }
    }
    assert_section_order(stdout, keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_order() {
        let out = "Listing\n...\nItem\n...\nSource\n";
        assert!(assert_section_order(out, &["Listing", "Item", "Source"]).is_ok());
        assert!(assert_section_order(out, &["Item", "Listing"]).is_err());
    }

    #[test]
    fn test_sections_present() {
        let page = json!({"content": {
            "state": "loaded",
            "listing": {"title": "Studio"},
            "item": null,
            "lodging": {"name": "Inn"}
        }});
        assert!(assert_page_state(&page, "loaded").is_ok());
        assert!(assert_sections_present(&page, &["listing", "lodging"]).is_ok());
        assert!(assert_sections_present(&page, &["listing"]).is_err());
    }
}
