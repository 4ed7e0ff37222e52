use serde::Serialize;

/// Broad category for a run-sheet item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceItemKind {
    Worship,
    Teaching,
    Prayer,
    Announcements,
    Transition,
}

impl ServiceItemKind {
    pub const fn label(self) -> &'static str {
        match self {
            ServiceItemKind::Worship => "Worship",
            ServiceItemKind::Teaching => "Teaching",
            ServiceItemKind::Prayer => "Prayer",
            ServiceItemKind::Announcements => "Announcements",
            ServiceItemKind::Transition => "Transition",
        }
    }
}

/// Template for one run-sheet entry before it is laid out on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTemplate {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ServiceItemKind,
    pub duration_minutes: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("run sheet item not found: {0}")]
    ItemNotFound(String),
}
