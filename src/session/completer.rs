//! TAB completion for SQL keywords, output directives and table names.
//!
//! The table list is fetched once at startup and moved in here; it is never
//! refreshed during the session.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::output::OutputFormat;

const KEYWORDS: &[&str] = &[
    // DML
    "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "LEFT", "RIGHT", "INNER",
    "OUTER", "ON", "AND", "OR", "NOT", "IN", "LIKE", "ILIKE", "BETWEEN", "IS", "NULL", "AS",
    "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET", "DISTINCT", "VALUES", "SET", "INTO",
    "RETURNING", "UNION", "EXISTS", "CASE", "WHEN", "THEN", "ELSE", "END",
    // DDL
    "CREATE", "DROP", "ALTER", "TABLE", "INDEX", "VIEW", "SCHEMA", "TRUNCATE",
    // Transactions
    "BEGIN", "COMMIT", "ROLLBACK",
    // Functions
    "COUNT", "SUM", "AVG", "MIN", "MAX", "COALESCE", "CAST", "NOW",
    // Utility
    "EXPLAIN", "ANALYZE", "SHOW",
];

/// Rustyline helper that completes keywords, directives and table names.
pub struct SqlHelper {
    tables: Vec<String>,
}

impl SqlHelper {
    pub fn new(tables: Vec<String>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Candidates for the partial word `word`.
    ///
    /// Keywords follow the case the user is typing; table names are
    /// matched case-insensitively and returned as stored.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        if word.starts_with('\\') {
            return OutputFormat::ALL
                .iter()
                .map(|f| f.directive())
                .filter(|d| d.starts_with(word))
                .map(str::to_string)
                .collect();
        }

        let upper = word.to_uppercase();
        let lowercase_input = !word.is_empty() && word == word.to_lowercase();

        let mut completions: Vec<String> = if word.is_empty() {
            Vec::new()
        } else {
            KEYWORDS
                .iter()
                .filter(|kw| kw.starts_with(&upper))
                .map(|kw| {
                    if lowercase_input {
                        kw.to_lowercase()
                    } else {
                        kw.to_string()
                    }
                })
                .collect()
        };

        completions.extend(
            self.tables
                .iter()
                .filter(|t| t.to_uppercase().starts_with(&upper))
                .cloned(),
        );

        completions.sort();
        completions.dedup();
        completions
    }
}

/// Start of the word that ends at `pos`.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace() || matches!(c, '(' | ',' | ';'))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

impl Completer for SqlHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);
        let word = &line[start..pos];

        let pairs = self
            .candidates(word)
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();

        Ok((start, pairs))
    }
}

impl Hinter for SqlHelper {
    type Hint = String;
}

impl Highlighter for SqlHelper {}

impl Validator for SqlHelper {}

impl Helper for SqlHelper {}
