use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Thumbnail shown when a record carries no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "images/latestprojects.jpg";

pub const DEFAULT_LINK_URL: &str = "#";
pub const DEFAULT_LINK_ICON: &str = "icon-link";
pub const DEFAULT_LINK_LABEL: &str = "Link";

/// Labels that mark an action as the card's primary one. Matching is
/// case-insensitive and exact, not substring.
pub const PRIMARY_ACTION_LABELS: [&str; 3] = ["view", "live", "demo"];

const FALLBACK_ALT_TEXT: &str = "Project";

/// One item of the external data collection. Scalar fields stay as raw
/// JSON values so oddly-typed records still load; coercion to text happens
/// in [`Project::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub desc: Option<Value>,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub tags: Vec<Value>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub icon: Option<Value>,
    #[serde(default)]
    pub label: Option<Value>,
}

impl Project {
    pub fn list_from_json(raw: &str) -> Result<Vec<Project>, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Pure default-resolution step: coerce every field to text and apply
    /// its documented fallback once, so downstream rendering never has to
    /// reason about absence.
    pub fn resolve(&self) -> ResolvedCard {
        ResolvedCard {
            title: text_or(&self.title, ""),
            desc: text_or(&self.desc, ""),
            image: text_or(&self.image, PLACEHOLDER_IMAGE),
            tags: self.tags.iter().map(text_value).collect(),
            actions: self.links.iter().map(ProjectLink::resolve).collect(),
        }
    }
}

impl ProjectLink {
    pub fn resolve(&self) -> ResolvedAction {
        ResolvedAction {
            url: text_or(&self.url, DEFAULT_LINK_URL),
            icon: text_or(&self.icon, DEFAULT_LINK_ICON),
            label: text_or(&self.label, DEFAULT_LINK_LABEL),
        }
    }
}

/// Fully-defaulted view of one record, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCard {
    pub title: String,
    pub desc: String,
    pub image: String,
    pub tags: Vec<String>,
    pub actions: Vec<ResolvedAction>,
}

impl ResolvedCard {
    /// Alternative text for the thumbnail. Unlike the heading, an empty
    /// title falls back to a generic word here.
    pub fn alt_text(&self) -> &str {
        if self.title.is_empty() {
            FALLBACK_ALT_TEXT
        } else {
            &self.title
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAction {
    pub url: String,
    pub icon: String,
    pub label: String,
}

impl ResolvedAction {
    /// Absolute http/https targets open in a new browsing context.
    pub fn is_external(&self) -> bool {
        let lowered = self.url.to_ascii_lowercase();
        lowered.starts_with("http://") || lowered.starts_with("https://")
    }

    pub fn is_primary(&self) -> bool {
        let lowered = self.label.to_ascii_lowercase();
        PRIMARY_ACTION_LABELS.iter().any(|kw| *kw == lowered)
    }
}

fn text_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => v.to_string(),
    }
}

fn text_or(v: &Option<Value>, fallback: &str) -> String {
    let coerced = v.as_ref().map(text_value).unwrap_or_default();
    if coerced.is_empty() {
        fallback.to_string()
    } else {
        coerced
    }
}
