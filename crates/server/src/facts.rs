//! "Le saviez-vous ?" fun facts.

use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;

/// One fact per non-blank line. A missing or unreadable file is logged and
/// yields no facts; the view shows a placeholder instead.
pub fn load_facts(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        Err(err) => {
            tracing::warn!("fun facts unavailable at {}: {err}", path.display());
            Vec::new()
        }
    }
}

pub fn pick_fact<'a, R: Rng + ?Sized>(facts: &'a [String], rng: &mut R) -> Option<&'a str> {
    facts.choose(rng).map(String::as_str)
}
