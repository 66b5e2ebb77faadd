//! docket-core
//!
//! Pure domain types for delivery receipts: the draft record, its line
//! items, the edit operations, and export filename conventions.
//! No rendering and no I/O; this is the shared vocabulary of Docket.

pub mod controller;
pub mod error;
pub mod export_names;
pub mod models;
pub mod schema;
