//! Runs a batch of queries through the parser and tallies the outcome.

use std::fmt;

use sqlfront_core::{ParserOptions, try_parse_sql_with_options};
use tracing::debug;

/// A query that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFailure {
    /// 1-based line number in the corpus file.
    pub line: usize,
    /// The query text.
    pub query: String,
    /// The rendered error, prefixed by stage.
    pub error: String,
}

/// Parse statistics for a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusReport {
    pub total: usize,
    pub passed: usize,
    pub failures: Vec<CorpusFailure>,
}

impl CorpusReport {
    /// Parses the queries in `text`, one per line, stopping after `limit`
    /// queries if given. Blank lines and lines starting with `#` are
    /// skipped.
    #[must_use]
    pub fn run(text: &str, options: &ParserOptions, limit: Option<usize>) -> Self {
        let mut report = Self::default();
        for (index, line) in text.lines().enumerate() {
            let query = line.trim();
            if query.is_empty() || query.starts_with('#') {
                continue;
            }
            if limit.is_some_and(|limit| report.total >= limit) {
                break;
            }
            report.total += 1;
            match try_parse_sql_with_options(query, options) {
                Ok(statement) => {
                    debug!(line = index + 1, kind = statement.kind(), "parsed");
                    report.passed += 1;
                }
                Err(err) => report.failures.push(CorpusFailure {
                    line: index + 1,
                    query: query.to_string(),
                    error: err.to_string(),
                }),
            }
        }
        report
    }

    /// Percentage of queries that parsed. An empty corpus counts as
    /// fully successful.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.passed as f64 * 100.0 / self.total as f64
    }

    /// Returns true if every query parsed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl fmt::Display for CorpusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.1}%)",
            self.passed,
            self.total,
            self.success_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_failures() {
        let corpus = "\
# users
SELECT * FROM users

SELECT FROM users
DELETE FROM users WHERE id = 1
SELECT 'open
";
        let report = CorpusReport::run(corpus, &ParserOptions::default(), None);
        assert_eq!(report.total, 4);
        assert_eq!(report.passed, 2);
        assert!(!report.all_passed());

        let lines: Vec<usize> = report.failures.iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![4, 6]);
        assert!(report.failures[0].error.starts_with("Parser error: "));
        assert!(report.failures[1].error.starts_with("Lexer error: "));
        assert_eq!(report.to_string(), "2/4 (50.0%)");
    }

    #[test]
    fn test_empty_corpus() {
        let report = CorpusReport::run("\n# nothing here\n", &ParserOptions::default(), None);
        assert_eq!(report.total, 0);
        assert!(report.all_passed());
        assert_eq!(report.to_string(), "0/0 (100.0%)");
    }

    #[test]
    fn test_options_apply_to_every_query() {
        let corpus = "SELECT * FROM a JOIN b JOIN c ON b.id = c.id";
        let relaxed = CorpusReport::run(corpus, &ParserOptions::default(), None);
        assert!(relaxed.all_passed());

        let strict = CorpusReport::run(
            corpus,
            &ParserOptions::new().allow_join_without_on(false),
            None,
        );
        assert_eq!(strict.passed, 0);
    }

    #[test]
    fn test_limit_counts_queries_not_lines() {
        let corpus = "# header\nSELECT 1\n\nSELECT 2\nSELECT FROM\n";
        let report = CorpusReport::run(corpus, &ParserOptions::default(), Some(2));
        assert_eq!(report.total, 2);
        assert!(report.all_passed());
    }
}
