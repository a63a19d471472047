//! Markdown assembly for the daily digest note.

use crate::domain::model::DigestData;
use chrono::NaiveDate;

pub const STALLED_HEADING: &str = "⚠️ Stalled Projects:";

/// Build markdown checklist text from action names.
pub fn build_checklist_section(title: &str, actions: &[String]) -> String {
    let empty_text = match title {
        "Pending Actions" => "No pending actions.".to_string(),
        "Awaiting Responses" => "No items awaiting responses.".to_string(),
        _ => format!("No {}.", title.to_lowercase()),
    };

    if actions.is_empty() {
        return format!("{}:\n\n_{}_", title, empty_text);
    }

    let mut lines = vec![format!("{}:", title), String::new()];
    for action in actions {
        lines.push(format!("- [ ] {}", action));
    }
    lines.join("\n")
}

pub fn build_stalled_section(projects: &[String]) -> String {
    let mut lines = vec![STALLED_HEADING.to_string(), String::new()];
    for project in projects {
        lines.push(format!("- {}", project));
    }
    lines.join("\n")
}

pub fn note_title(run_date: NaiveDate) -> String {
    format!("Notion To Dos – {}", run_date.format("%d-%m-%Y"))
}

/// Compose the ordered digest body, or `None` when there is nothing to say.
///
/// Sections are joined with a blank line; a `---` rule sits between adjacent
/// non-empty sections and never at the very start. Degraded fetches contribute
/// empty data here; their errors were already logged at the call site.
pub fn assemble(data: &DigestData) -> Option<String> {
    let weekly_goals = data.weekly_goals_text();
    let pending = data.pending();
    let waiting = data.waiting();
    let stalled = data.stalled();
    let unscheduled = data.unscheduled_count();
    let contacts = data.contacts_count();
    let interactions = data.interactions_count();

    // Skip entirely only if absolutely nothing to say
    if weekly_goals.is_none()
        && pending.is_empty()
        && waiting.is_empty()
        && stalled.is_empty()
        && unscheduled == 0
        && contacts == 0
        && interactions == 0
    {
        return None;
    }

    let mut sections: Vec<String> = Vec::new();

    // 1) Weekly Goals at top (if available)
    if let Some(goals) = weekly_goals {
        sections.push(goals.to_string());
        sections.push("---".to_string());
    }

    // 2) Pending Actions
    sections.push(build_checklist_section("Pending Actions", pending));

    // 3) Awaiting Responses
    sections.push("---".to_string());
    sections.push(build_checklist_section("Awaiting Responses", waiting));

    // 4) Stalled projects
    if !stalled.is_empty() {
        sections.push("---".to_string());
        sections.push(build_stalled_section(stalled));
    }

    // 5) Unscheduled footer
    if unscheduled > 0 {
        sections.push("---".to_string());
        sections.push("&nbsp;".to_string()); // spacer
        sections.push(format!(
            "Unscheduled actions in Notion (no Do Date): **{}**",
            unscheduled
        ));
    }

    // 6) CRM counts footer
    if contacts > 0 || interactions > 0 {
        sections.push("---".to_string());
        sections.push("CRM Review".to_string());
        if contacts > 0 {
            sections.push(format!("- Contacts needing review: **{}**", contacts));
        }
        if interactions > 0 {
            sections.push(format!(
                "- Interactions marked for project review: **{}**",
                interactions
            ));
        }
    }

    Some(sections.join("\n\n"))
}
