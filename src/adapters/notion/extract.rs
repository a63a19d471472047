//! Pull display text out of heterogeneous Notion result records.

use serde_json::Value;

const WEEKLY_GOALS_HEADING: &str = "weekly goals";

fn rich_text_plain(parts: &[Value]) -> String {
    parts
        .iter()
        .filter_map(|part| part.get("plain_text").and_then(Value::as_str))
        .collect::<String>()
        .trim()
        .to_string()
}

/// The `Name` title property of a page, or `None` when the property is
/// missing, not a title, or has no text. Such pages are skipped silently.
pub fn extract_title(page: &Value) -> Option<String> {
    let name = page.get("properties")?.get("Name")?;
    if name.get("type")?.as_str()? != "title" {
        return None;
    }
    let first = name.get("title")?.as_array()?.first()?;
    first
        .get("plain_text")
        .and_then(Value::as_str)
        .map(str::to_string)
}

pub fn extract_action_names(results: &[Value]) -> Vec<String> {
    results.iter().filter_map(extract_title).collect()
}

/// Find the id of the heading block whose text reads "Weekly Goals". Both the
/// toggle and plain heading variants occur in the wild.
pub fn find_weekly_goals_block(blocks: &[Value]) -> Option<String> {
    for block in blocks {
        let Some(btype) = block.get("type").and_then(Value::as_str) else {
            continue;
        };
        if btype != "toggle_heading_1" && btype != "heading_1" {
            continue;
        }

        let text = block
            .get(btype)
            .and_then(|content| content.get("rich_text"))
            .and_then(Value::as_array)
            .map(|parts| rich_text_plain(parts))
            .unwrap_or_default();

        if text.to_lowercase() == WEEKLY_GOALS_HEADING {
            return block.get("id").and_then(Value::as_str).map(str::to_string);
        }
    }
    None
}

/// Render the bullet children of the Weekly Goals block as markdown, or `None`
/// when no non-blank bullets exist.
pub fn weekly_goals_markdown(children: &[Value]) -> Option<String> {
    let mut lines = vec!["Weekly Goals".to_string(), String::new()];
    let mut found = false;

    for block in children {
        if block.get("type").and_then(Value::as_str) != Some("bulleted_list_item") {
            continue;
        }

        let text = block
            .get("bulleted_list_item")
            .and_then(|content| content.get("rich_text"))
            .and_then(Value::as_array)
            .map(|parts| rich_text_plain(parts))
            .unwrap_or_default();

        if !text.is_empty() {
            lines.push(format!("- {}", text));
            found = true;
        }
    }

    found.then(|| lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(name_prop: Value) -> Value {
        json!({ "id": "page1", "properties": { "Name": name_prop } })
    }

    #[test]
    fn test_extract_title_reads_first_part() {
        let result = page(json!({
            "type": "title",
            "title": [ { "plain_text": "Call dentist" }, { "plain_text": " (again)" } ]
        }));
        assert_eq!(extract_title(&result), Some("Call dentist".to_string()));
    }

    #[test]
    fn test_extract_action_names_skips_bad_records() {
        let results = vec![
            page(json!({ "type": "title", "title": [ { "plain_text": "Keep me" } ] })),
            // Empty title array
            page(json!({ "type": "title", "title": [] })),
            // Not a title property
            page(json!({ "type": "rich_text", "title": [ { "plain_text": "nope" } ] })),
            // No Name property at all
            json!({ "id": "page2", "properties": {} }),
        ];

        let names = extract_action_names(&results);
        assert_eq!(names, ["Keep me".to_string()]);
        assert!(names.len() <= results.len());
    }

    fn heading(btype: &str, id: &str, text: &str) -> Value {
        json!({
            "id": id,
            "type": btype,
            btype: { "rich_text": [ { "plain_text": text } ] }
        })
    }

    #[test]
    fn test_find_weekly_goals_block_is_case_insensitive() {
        let blocks = vec![
            heading("heading_1", "h1", "Today"),
            heading("toggle_heading_1", "h2", "WEEKLY goals"),
        ];
        assert_eq!(find_weekly_goals_block(&blocks), Some("h2".to_string()));
    }

    #[test]
    fn test_find_weekly_goals_block_concatenates_rich_text() {
        let blocks = vec![json!({
            "id": "h3",
            "type": "heading_1",
            "heading_1": { "rich_text": [
                { "plain_text": "Weekly " },
                { "plain_text": "Goals" }
            ] }
        })];
        assert_eq!(find_weekly_goals_block(&blocks), Some("h3".to_string()));
    }

    #[test]
    fn test_find_weekly_goals_block_ignores_other_types() {
        let blocks = vec![json!({
            "id": "p1",
            "type": "paragraph",
            "paragraph": { "rich_text": [ { "plain_text": "weekly goals" } ] }
        })];
        assert_eq!(find_weekly_goals_block(&blocks), None);
    }

    fn bullet(text: &str) -> Value {
        json!({
            "type": "bulleted_list_item",
            "bulleted_list_item": { "rich_text": [ { "plain_text": text } ] }
        })
    }

    #[test]
    fn test_weekly_goals_markdown_renders_bullets() {
        let children = vec![bullet("Ship v2"), bullet("   "), bullet("Review budget")];
        assert_eq!(
            weekly_goals_markdown(&children),
            Some("Weekly Goals\n\n- Ship v2\n- Review budget".to_string())
        );
    }

    #[test]
    fn test_weekly_goals_markdown_empty_when_only_blank_bullets() {
        let children = vec![bullet(""), bullet("  ")];
        assert_eq!(weekly_goals_markdown(&children), None);
    }
}
