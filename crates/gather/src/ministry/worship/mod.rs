//! Worship service planning: blueprints of run-sheet items and the time
//! arithmetic that lays a dated run of show out from a start time.

mod blueprint;
pub mod domain;
mod plan;

pub use blueprint::ServiceBlueprint;
pub use domain::{ItemTemplate, PlanError, ServiceItemKind};
pub use plan::{PlanItemView, PlannedItem, ServicePlan};
