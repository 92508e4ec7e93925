//! Generator facade, presets, mutators, and the interactive console.
//!
//! This crate provides:
//! - [`PhraseGenerator`] - The generate/count facade over the engine
//! - [`PresetRegistry`] - Named phrase descriptions shipped with the runtime
//! - [`Mutator`] - Post-resolution text transforms (uppercase, digits)
//! - [`Console`] - The `prattle` binary's read-eval loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod console;
pub mod editor;
pub mod generator;
pub mod mutator;
pub mod presets;

pub use console::{Console, Response};
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use generator::PhraseGenerator;
pub use mutator::{DigitMutator, DigitPosition, Mutator, UppercaseMutator, UppercaseStyle};
pub use presets::PresetRegistry;
