//! Whole-system integration tests
//!
//! Seeded determinism, exhaustive draw-path enumeration against the closed
//! form, preset behavior, and the facade pipeline end to end.

mod determinism;
mod pipeline;
mod presets;
