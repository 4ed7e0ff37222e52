use super::domain::{ItemTemplate, ServiceItemKind};

/// Ordered set of run-sheet item templates for a gathering style.
#[derive(Debug)]
pub struct ServiceBlueprint {
    items: Vec<ItemTemplate>,
}

impl ServiceBlueprint {
    pub fn sunday_morning() -> Self {
        Self {
            items: sunday_morning_items(),
        }
    }

    pub fn item_templates(&self) -> &[ItemTemplate] {
        &self.items
    }

    pub fn items_of_kind(&self, kind: ServiceItemKind) -> Vec<&ItemTemplate> {
        self.items.iter().filter(|item| item.kind == kind).collect()
    }
}

fn sunday_morning_items() -> Vec<ItemTemplate> {
    vec![
        ItemTemplate {
            key: "countdown",
            title: "Countdown & Walk-In",
            kind: ServiceItemKind::Transition,
            duration_minutes: 5,
        },
        ItemTemplate {
            key: "welcome",
            title: "Welcome & Call to Worship",
            kind: ServiceItemKind::Transition,
            duration_minutes: 3,
        },
        ItemTemplate {
            key: "worship_set",
            title: "Worship Set",
            kind: ServiceItemKind::Worship,
            duration_minutes: 18,
        },
        ItemTemplate {
            key: "announcements",
            title: "Announcements & Welcome to Guests",
            kind: ServiceItemKind::Announcements,
            duration_minutes: 4,
        },
        ItemTemplate {
            key: "pastoral_prayer",
            title: "Pastoral Prayer",
            kind: ServiceItemKind::Prayer,
            duration_minutes: 4,
        },
        ItemTemplate {
            key: "message",
            title: "Message",
            kind: ServiceItemKind::Teaching,
            duration_minutes: 32,
        },
        ItemTemplate {
            key: "response",
            title: "Response Song",
            kind: ServiceItemKind::Worship,
            duration_minutes: 6,
        },
        ItemTemplate {
            key: "benediction",
            title: "Benediction & Dismissal",
            kind: ServiceItemKind::Prayer,
            duration_minutes: 3,
        },
    ]
}
