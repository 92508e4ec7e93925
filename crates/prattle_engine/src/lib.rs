//! Template building, word resolution, and combination counting for Prattle.
//!
//! This crate provides:
//! - [`build_templates`] - Runs the linking and emission passes over a clause list
//! - [`resolve_templates`] - Resolves templates to delimited text
//! - [`calculate_combinations`] - The closed-form combination count

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod combinatorics;
pub mod resolver;

pub use builder::build_templates;
pub use combinatorics::calculate_combinations;
pub use resolver::resolve_templates;
