//! Parses stylesheet files and reports the first syntax error in each.
//!
//! ```text
//! cargo run --example check -- app.tcss theme.tcss
//! ```

use std::process::ExitCode;

use tcss_toolkit::tcss::parse_stylesheet;
use tcss_toolkit::{ParseError, TcssError};

fn report(path: &str, source: &str, err: &ParseError) {
    eprintln!("{path}:{}:{}: {}", err.line, err.column, err.message);
    if let Some(line) = source.lines().nth(err.line.saturating_sub(1)) {
        eprintln!("    {line}");
        eprintln!("    {}^", " ".repeat(err.column.saturating_sub(1)));
    }
}

fn check(path: &str) -> bool {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{path}: {err}");
            return false;
        }
    };

    match parse_stylesheet(&source) {
        Ok(sheet) => {
            println!(
                "{path}: ok ({} rules, {} variables)",
                sheet.rules.len(),
                sheet.variables.len()
            );
            true
        }
        Err(TcssError::Parse(err)) => {
            report(path, &source, &err);
            false
        }
        Err(err) => {
            eprintln!("{path}: {err}");
            false
        }
    }
}

fn main() -> ExitCode {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: check <stylesheet>...");
        return ExitCode::from(2);
    }

    let failures = paths.iter().filter(|path| !check(path)).count();
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
