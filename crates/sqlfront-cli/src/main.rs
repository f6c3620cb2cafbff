//! sqlfront CLI
//!
//! Parses SQL from stdin, a corpus file, or a built-in set of
//! demonstration queries.

mod corpus;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sqlfront_core::{DEFAULT_MAX_DEPTH, ParserOptions, Statement, try_parse_sql_with_options};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::corpus::CorpusReport;

const DEMO_QUERIES: &[&str] = &[
    "SELECT * FROM users",
    "SELECT id, name FROM users WHERE age > 18 AND status = 'active'",
    "SELECT u.name, COUNT(*) AS orders FROM users u \
     LEFT JOIN orders o ON u.id = o.user_id GROUP BY u.name HAVING COUNT(*) > 5",
    "SELECT name FROM users WHERE id NOT IN (SELECT user_id FROM banned) \
     ORDER BY name DESC LIMIT 10 OFFSET 5",
    "INSERT INTO users (name, age) VALUES ('Alice', 30), ('Bob', 25)",
    "UPDATE users SET age = age + 1 WHERE name LIKE 'A%'",
    "DELETE FROM users WHERE last_login IS NULL",
    "CREATE TABLE users (id INTEGER PRIMARY KEY, name VARCHAR(255) NOT NULL)",
];

/// Hand-written SQL lexer and parser.
#[derive(Parser)]
#[command(name = "sqlfront")]
#[command(author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Parse one statement read from stdin; exit code 0 on success.
    #[arg(long, conflicts_with = "corpus")]
    parse: bool,

    /// Parse every query in FILE, one per line, and report the success rate.
    #[arg(long, value_name = "FILE")]
    corpus: Option<PathBuf>,

    /// Stop the corpus run after N queries.
    #[arg(long, value_name = "N", requires = "corpus")]
    limit: Option<usize>,

    /// Print parsed statements as JSON.
    #[arg(long)]
    json: bool,

    /// Maximum nesting depth of expressions and subqueries.
    #[arg(long, env = "SQLFRONT_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Require ON for every non-CROSS join.
    #[arg(long)]
    strict_joins: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    const fn parser_options(&self) -> ParserOptions {
        ParserOptions::new()
            .max_depth(self.max_depth)
            .allow_join_without_on(!self.strict_joins)
    }
}

fn render(statement: &Statement, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(statement)?)
    } else {
        Ok(format!("{statement:#?}"))
    }
}

fn run_stdin(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    match try_parse_sql_with_options(&input, &cli.parser_options()) {
        Ok(statement) => {
            if cli.json {
                println!("{}", render(&statement, true)?);
            } else {
                println!("OK");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_corpus(cli: &Cli, path: &Path) -> anyhow::Result<ExitCode> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    info!("Parsing corpus {}", path.display());

    let report = CorpusReport::run(&text, &cli.parser_options(), cli.limit);
    if cli.verbose {
        for failure in &report.failures {
            warn!(line = failure.line, "{}: {}", failure.query, failure.error);
        }
    }
    println!("{report}");

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_demo(cli: &Cli) -> anyhow::Result<ExitCode> {
    let options = cli.parser_options();
    for query in DEMO_QUERIES {
        println!("{query}");
        match try_parse_sql_with_options(query, &options) {
            Ok(statement) => println!("{}\n", render(&statement, cli.json)?),
            Err(err) => println!("  {err}\n"),
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if cli.parse {
        run_stdin(&cli)
    } else if let Some(path) = &cli.corpus {
        run_corpus(&cli, path)
    } else {
        run_demo(&cli)
    }
}
