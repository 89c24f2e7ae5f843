//! Domain model for activity records.
//!
//! # Responsibility
//! - Define the persisted `Activity` shape and its insert-time input.
//!
//! # Invariants
//! - An `ActivityId` is assigned by storage and never chosen by callers.

pub mod activity;
