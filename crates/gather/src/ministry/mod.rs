//! Domain modules for the Gather platform core: the volunteer roster, the
//! auto-scheduling pipeline, and worship run-sheet planning.

pub mod roster;
pub mod scheduling;
pub mod worship;
