use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;

use super::blueprint::ServiceBlueprint;
use super::domain::{ItemTemplate, PlanError, ServiceItemKind};

/// Serializable view of one laid-out run-sheet item.
#[derive(Debug, Clone, Serialize)]
pub struct PlanItemView {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ServiceItemKind,
    pub kind_label: String,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub duration_minutes: u32,
}

/// A dated run sheet laid out from a blueprint. Items occupy back-to-back
/// slots starting at the service start time; editing a duration re-lays out
/// everything after it.
#[derive(Debug)]
pub struct ServicePlan {
    service_date: NaiveDate,
    starts_at: NaiveTime,
    items: Vec<PlannedItem>,
}

#[derive(Debug, Clone)]
pub struct PlannedItem {
    pub template: ItemTemplate,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
}

impl PlannedItem {
    pub fn to_view(&self) -> PlanItemView {
        PlanItemView {
            key: self.template.key,
            title: self.template.title,
            kind: self.template.kind,
            kind_label: self.template.kind.label().to_string(),
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            duration_minutes: self.template.duration_minutes,
        }
    }
}

impl ServicePlan {
    pub fn new(blueprint: &ServiceBlueprint, service_date: NaiveDate, starts_at: NaiveTime) -> Self {
        let items = blueprint
            .item_templates()
            .iter()
            .cloned()
            .map(|template| PlannedItem {
                template,
                starts_at,
                ends_at: starts_at,
            })
            .collect();

        let mut plan = Self {
            service_date,
            starts_at,
            items,
        };
        plan.layout();
        plan
    }

    fn layout(&mut self) {
        let mut cursor = self.starts_at;
        for item in &mut self.items {
            item.starts_at = cursor;
            cursor = cursor + Duration::minutes(i64::from(item.template.duration_minutes));
            item.ends_at = cursor;
        }
    }

    /// Change one item's length and re-lay out everything after it.
    pub fn set_duration(&mut self, key: &str, minutes: u32) -> Result<(), PlanError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.template.key == key)
            .ok_or_else(|| PlanError::ItemNotFound(key.to_owned()))?;

        item.template.duration_minutes = minutes;
        self.layout();
        Ok(())
    }

    pub fn service_date(&self) -> NaiveDate {
        self.service_date
    }

    pub fn starts_at(&self) -> NaiveTime {
        self.starts_at
    }

    pub fn ends_at(&self) -> NaiveTime {
        self.items
            .last()
            .map(|item| item.ends_at)
            .unwrap_or(self.starts_at)
    }

    pub fn total_duration_minutes(&self) -> u32 {
        self.items
            .iter()
            .map(|item| item.template.duration_minutes)
            .sum()
    }

    pub fn minutes_of_kind(&self, kind: ServiceItemKind) -> u32 {
        self.items
            .iter()
            .filter(|item| item.template.kind == kind)
            .map(|item| item.template.duration_minutes)
            .sum()
    }

    pub fn items(&self) -> &[PlannedItem] {
        &self.items
    }

    pub fn item_details(&self) -> Vec<PlanItemView> {
        self.items.iter().map(PlannedItem::to_view).collect()
    }
}
