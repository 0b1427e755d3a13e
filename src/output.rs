//! Output formatting for human and JSON modes
//!
//! Command results are plain serializable structs that render either as
//! readable text or as pretty-printed JSON.

use std::fmt::Write as _;

use serde::Serialize;

use crate::pairing::{Pair, Pairings};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a `draw` command
#[derive(Debug, Serialize)]
pub struct DrawResult {
    /// Number of participants
    pub participants: usize,
    /// Seed used, if the draw was seeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Every giver and giftee, in roster order
    pub pairs: Vec<Pair>,
}

impl DrawResult {
    /// Capture a finished draw
    #[must_use]
    pub fn new(pairings: &Pairings, seed: Option<u64>) -> Self {
        Self {
            participants: pairings.len(),
            seed,
            pairs: pairings.iter().cloned().collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => render_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let width = self.pairs.iter().map(|p| p.giver.chars().count()).max().unwrap_or(0);

        let mut out = format!("Drew {} pair(s)", self.participants);
        if let Some(seed) = self.seed {
            let _ = write!(out, " (seed {seed})");
        }
        out.push_str(":\n\n");

        for pair in &self.pairs {
            let _ = writeln!(out, "  {:<width$}  ->  {}", pair.giver, pair.giftee);
        }
        out
    }
}

/// Result of a `roster` command
#[derive(Debug, Serialize)]
pub struct RosterResult {
    /// File the names were read from
    pub source: String,
    /// Number of names
    pub count: usize,
    /// Names in file order
    pub names: Vec<String>,
}

impl RosterResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => render_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.names.is_empty() {
            return format!("No participants in {}.\n", self.source);
        }

        let mut out = format!("{} participant(s) in {}:\n\n", self.count, self.source);
        for (i, name) in self.names.iter().enumerate() {
            let _ = writeln!(out, "  {:>3}. {name}", i + 1);
        }
        out
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
