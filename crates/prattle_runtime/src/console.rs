//! The interactive console behind the `prattle` binary.
//!
//! A line-oriented read-eval loop: each line is one command, dispatched
//! without an argument parser. Parse failures in a `description` command are
//! non-fatal; the current description is kept and the error printed with its
//! byte offset.

use std::sync::Arc;

use prattle_foundation::{ErrorKind, Result, SeededRandomSource};
use prattle_grammar::Clause;
use prattle_lexicon::starter_lexicon;
use prattle_parser::{parse, serialize};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::generator::PhraseGenerator;
use crate::presets::PresetRegistry;

/// What one command produced: lines to print, and whether to exit.
#[derive(Debug, Default)]
pub struct Response {
    /// Output lines, printed in order.
    pub lines: Vec<String>,
    /// Whether the console should exit after printing.
    pub quit: bool,
}

impl Response {
    fn say(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            quit: false,
        }
    }
}

/// The interactive console.
pub struct Console<E: LineEditor = RustylineEditor> {
    editor: E,
    generator: PhraseGenerator,
    registry: PresetRegistry,
    clauses: Vec<Clause>,
}

impl Console<RustylineEditor> {
    /// Creates a console with the default rustyline editor, the starter
    /// lexicon, and the `normal` preset selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?))
    }
}

impl<E: LineEditor> Console<E> {
    /// Creates a console with the given editor.
    pub fn with_editor(editor: E) -> Self {
        let registry = PresetRegistry::standard();
        let clauses = registry
            .get("normal")
            .map(<[Clause]>::to_vec)
            .unwrap_or_default();
        let generator = PhraseGenerator::new(
            Arc::new(starter_lexicon()),
            SeededRandomSource::from_entropy(),
        );
        Self {
            editor,
            generator,
            registry,
            clauses,
        }
    }

    /// The currently selected clause list.
    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Runs the read-eval loop until `quit` or EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally. Command failures are
    /// printed and never end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.editor.read_line("prattle> ")? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(trimmed);
                    let response = self.execute(trimmed);
                    for out in &response.lines {
                        println!("{out}");
                    }
                    if response.quit {
                        break;
                    }
                }
                ReadResult::Interrupted => println!("(interrupted)"),
                ReadResult::Eof => break,
            }
        }
        println!("Goodbye!");
        Ok(())
    }

    /// Executes one command line.
    ///
    /// All failures are reported as output lines; nothing here is fatal.
    pub fn execute(&mut self, line: &str) -> Response {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        match command {
            "help" => Self::help(),
            "presets" => self.presets(),
            "preset" => self.preset(rest),
            "generate" => self.generate(rest),
            "combinations" => self.combinations(),
            "describe" => self.describe(),
            "description" => self.description(rest),
            "delimiter" => self.delimiter(rest),
            "seed" => self.seed(rest),
            "quit" => Response {
                lines: Vec::new(),
                quit: true,
            },
            _ => Response::say(format!("unknown command: {command} (try 'help')")),
        }
    }

    fn help() -> Response {
        Response {
            lines: vec![
                "commands:".to_string(),
                "  help                 show this help".to_string(),
                "  presets              list preset names".to_string(),
                "  preset <name>        select a preset description".to_string(),
                "  generate [n]         generate n phrases (default 1)".to_string(),
                "  combinations         count the current description".to_string(),
                "  describe             print the current description".to_string(),
                "  description <text>   parse an inline description".to_string(),
                "  delimiter <s>        set the word delimiter".to_string(),
                "  seed <u64>           reseed the random source".to_string(),
                "  quit                 exit".to_string(),
            ],
            quit: false,
        }
    }

    fn presets(&self) -> Response {
        Response {
            lines: self.registry.names().map(str::to_string).collect(),
            quit: false,
        }
    }

    fn preset(&mut self, name: &str) -> Response {
        match self.registry.get(name) {
            Some(clauses) => {
                self.clauses = clauses.to_vec();
                Response::say(format!("preset: {name}"))
            }
            None => Response::say(format!("unknown preset: {name} (try 'presets')")),
        }
    }

    fn generate(&mut self, rest: &str) -> Response {
        let count = if rest.is_empty() {
            1
        } else {
            match rest.parse::<usize>() {
                Ok(count) => count,
                Err(_) => return Response::say(format!("not a count: {rest}")),
            }
        };
        let mut lines = Vec::with_capacity(count);
        for _ in 0..count {
            match self.generator.generate(&self.clauses) {
                Ok(phrase) => lines.push(phrase),
                Err(e) => {
                    lines.push(format!("error: {e}"));
                    break;
                }
            }
        }
        Response { lines, quit: false }
    }

    fn combinations(&self) -> Response {
        match self.generator.combinations(&self.clauses) {
            Ok(combos) => Response::say(combos.to_string()),
            Err(e) => Response::say(format!("error: {e}")),
        }
    }

    fn describe(&self) -> Response {
        Response {
            lines: serialize(&self.clauses)
                .lines()
                .map(str::to_string)
                .collect(),
            quit: false,
        }
    }

    fn description(&mut self, text: &str) -> Response {
        match parse(text) {
            Ok(clauses) => {
                self.clauses = clauses;
                Response::say(format!("description: {} clauses", self.clauses.len()))
            }
            // Parse failures keep the current description.
            Err(e) => match e.kind {
                ErrorKind::Parse { message, offset } => {
                    Response::say(format!("parse error at offset {offset}: {message}"))
                }
                other => Response::say(format!("error: {other}")),
            },
        }
    }

    fn delimiter(&mut self, rest: &str) -> Response {
        if rest.is_empty() {
            return Response::say(format!("delimiter: {:?}", self.generator.delimiter()));
        }
        self.generator.set_delimiter(rest);
        Response::say(format!("delimiter: {rest:?}"))
    }

    fn seed(&mut self, rest: &str) -> Response {
        match rest.parse::<u64>() {
            Ok(seed) => {
                self.generator.set_rng(SeededRandomSource::from_seed(seed));
                Response::say(format!("seed: {seed}"))
            }
            Err(_) => Response::say(format!("not a seed: {rest}")),
        }
    }
}
