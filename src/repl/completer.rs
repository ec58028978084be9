use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::repl::commands::{COMMAND_NAMES, SUGGESTIONS};

#[derive(Default)]
pub struct ReplHelper;

impl Helper for ReplHelper {}
impl Validator for ReplHelper {}
impl Highlighter for ReplHelper {}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let trimmed = line.trim();
        if !trimmed.starts_with('/') || trimmed.contains(' ') {
            return None;
        }
        for name in COMMAND_NAMES {
            if name.starts_with(trimmed) && *name != trimmed {
                return Some(name[trimmed.len()..].to_string());
            }
        }
        None
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let trimmed = prefix.trim_start();
        let start = pos - trimmed.len();

        // Bare text or /search arguments complete to suggestions
        let (query_start, query_prefix) = if let Some(rest) = trimmed.strip_prefix("/search ") {
            (pos - rest.len(), rest)
        } else if !trimmed.starts_with('/') {
            (start, trimmed)
        } else {
            let matches = COMMAND_NAMES
                .iter()
                .filter(|name| name.starts_with(trimmed))
                .map(|name| Pair {
                    display: name.to_string(),
                    replacement: name.to_string(),
                })
                .collect();
            return Ok((start, matches));
        };

        let needle = query_prefix.to_lowercase();
        let matches = SUGGESTIONS
            .iter()
            .filter(|s| s.to_lowercase().starts_with(&needle))
            .map(|s| Pair {
                display: s.to_string(),
                replacement: s.to_string(),
            })
            .collect();
        Ok((query_start, matches))
    }
}
