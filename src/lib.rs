//! Employee Roster Engine
//!
//! This crate provides a console-driven, in-memory employee roster: records
//! carry a performance rating derived from completed work, weekly work
//! hours, and salary, and the roster supports add, remove, update, search,
//! and efficiency-ranked listing.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod roster;
