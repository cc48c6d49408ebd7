//! Core domain logic for conjuga
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (VerbDefinition, Tense, Person, PracticeAttempt)
//! - `services/` - Resolution, checking, selection, aggregation, the workbook
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
