//! Single-document term statistics.
//!
//! The "IDF" here is computed against the one document being analyzed:
//! `score = ln(total_tokens / frequency)`. Rare terms score highest, a term
//! filling every token position scores exactly zero.

use crate::config::DEFAULT_LIMIT;
use crate::document::{decode, Decoding};
use crate::error::Result;
use crate::lexer::{self, WordClass};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermStat {
    pub term: String,
    pub frequency: usize,
    pub score: f64,
}

/// Ranked and truncated term statistics, highest score first.
/// Order among equal scores is unspecified.
pub type ResultSet = Vec<TermStat>;

/// Occurrence counts of every distinct token in one document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    total_tokens: usize,
}

impl FrequencyTable {
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut counts = HashMap::<String, usize>::new();
        let mut total_tokens = 0;
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
            total_tokens += 1;
        }
        FrequencyTable {
            counts,
            total_tokens,
        }
    }

    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    pub fn distinct_terms(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_tokens == 0
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.counts.get(term).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }
}

/// Scores every distinct term. The result is unordered.
pub fn score(table: &FrequencyTable) -> Vec<TermStat> {
    if table.is_empty() {
        return Vec::new();
    }
    let total = table.total_tokens() as f64;
    table
        .iter()
        .map(|(term, frequency)| TermStat {
            term: term.to_string(),
            frequency,
            score: f64::ln(total / frequency as f64),
        })
        .collect()
}

/// Sorts by score descending and keeps the first `limit` entries.
pub fn rank(mut stats: Vec<TermStat>, limit: usize) -> ResultSet {
    // scores are always finite, so total_cmp agrees with numeric order
    stats.sort_unstable_by(|a, b| b.score.total_cmp(&a.score));
    stats.truncate(limit);
    stats
}

/// Runs the whole pipeline on raw bytes with strict UTF-8 decoding and the
/// default word class.
pub fn compute_term_stats(raw_bytes: &[u8], limit: usize) -> Result<ResultSet> {
    let analyzer = Analyzer {
        limit,
        decoding: Decoding::Strict,
        ..Analyzer::default()
    };
    Ok(analyzer.analyze(raw_bytes)?.terms)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub total_tokens: usize,
    pub distinct_terms: usize,
    pub terms: ResultSet,
}

/// An [`Analysis`] labelled with its document, as printed by the CLI and
/// returned by the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub filename: String,
    #[serde(flatten)]
    pub analysis: Analysis,
}

/// Pipeline options. Cheap to copy; each call builds its own tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Analyzer {
    pub limit: usize,
    pub word_class: WordClass,
    pub decoding: Decoding,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer {
            limit: DEFAULT_LIMIT,
            word_class: WordClass::default(),
            decoding: Decoding::default(),
        }
    }
}

impl Analyzer {
    pub fn analyze(&self, raw_bytes: &[u8]) -> Result<Analysis> {
        let text = decode(raw_bytes, self.decoding)?;
        Ok(self.analyze_text(&text))
    }

    pub fn analyze_text(&self, text: &str) -> Analysis {
        let table = FrequencyTable::from_tokens(lexer::terms(text, self.word_class));
        let terms = rank(score(&table), self.limit);
        tracing::debug!(
            total_tokens = table.total_tokens(),
            distinct_terms = table.distinct_terms(),
            returned = terms.len(),
            "scored document"
        );
        Analysis {
            total_tokens: table.total_tokens(),
            distinct_terms: table.distinct_terms(),
            terms,
        }
    }
}
