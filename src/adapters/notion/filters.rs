//! Declarative query payloads for the Notion databases this tool reads.
//!
//! Builders return the JSON body for `POST /databases/{id}/query`; nothing here
//! performs IO. Date-bounded builders take the run date so every query in one
//! run compares against the same day.

use chrono::Utc;
use serde_json::{json, Value};

/// The UTC calendar date in ISO-8601 form, computed once per run.
pub fn today_utc() -> String {
    Utc::now().date_naive().to_string()
}

/// Actions that are not done, not waiting, and due today or earlier.
pub fn pending_actions(today_iso: &str) -> Value {
    json!({
        "filter": {
            "and": [
                { "property": "Done", "checkbox": { "equals": false } },
                { "property": "Waiting", "checkbox": { "equals": false } },
                { "property": "Do Date", "date": { "on_or_before": today_iso } }
            ]
        }
    })
}

/// Actions that are not done, marked as waiting, and due today or earlier.
pub fn waiting_actions(today_iso: &str) -> Value {
    json!({
        "filter": {
            "and": [
                { "property": "Done", "checkbox": { "equals": false } },
                { "property": "Waiting", "checkbox": { "equals": true } },
                { "property": "Do Date", "date": { "on_or_before": today_iso } }
            ]
        }
    })
}

/// Open actions with no Do Date at all.
pub fn unscheduled_actions() -> Value {
    json!({
        "filter": {
            "and": [
                { "property": "Done", "checkbox": { "equals": false } },
                { "property": "Waiting", "checkbox": { "equals": false } },
                { "property": "Do Date", "date": { "is_empty": true } }
            ]
        }
    })
}

pub fn in_progress_projects() -> Value {
    json!({
        "filter": {
            "property": "Status",
            "status": { "equals": "In Progress" }
        }
    })
}

/// Open next-step actions scoped to one project. One match is enough to prove
/// the project is not stalled, so a single result is requested.
pub fn project_next_step(project_id: &str) -> Value {
    json!({
        "filter": {
            "and": [
                { "property": "Project", "relation": { "contains": project_id } },
                { "property": "Next Step", "checkbox": { "equals": true } },
                { "property": "Done", "checkbox": { "equals": false } }
            ]
        },
        "page_size": 1
    })
}

/// Records whose review checkbox is set. The property name differs between the
/// Contacts ("Needs Review") and Interactions ("Project Review") databases.
pub fn needs_review(property: &str) -> Value {
    json!({
        "filter": {
            "property": property,
            "checkbox": { "equals": true }
        }
    })
}
