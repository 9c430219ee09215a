//! The `lex` command: dump the token stream of a file.

use lexis_core::{LineTracking, Scanner, ScannerConfig, Token};

use super::read_file;
use crate::report::eprint_scan_error;

/// Options accepted by `lexis lex <file> [options]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub config: ScannerConfig,
    /// Print a JSON array instead of one token per line.
    pub json: bool,
}

impl LexOptions {
    /// Parse the arguments following the file path.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = LexOptions::default();
        for arg in args {
            match arg.as_str() {
                "--ignore-line-breaks" => options.config.ignore_line_breaks = true,
                "--no-buffer-growth" => options.config.allow_buffer_growth = false,
                "--json" => options.json = true,
                _ => {
                    if let Some(mode) = arg.strip_prefix("--line-tracking=") {
                        options.config.line_tracking = LineTracking::from_name(mode)
                            .ok_or_else(|| {
                                format!(
                                    "unknown line tracking '{mode}' (expected 'whitespace' or 'line-break')"
                                )
                            })?;
                    } else if let Some(n) = arg.strip_prefix("--buffer-capacity=") {
                        options.config.buffer_capacity = n
                            .parse()
                            .map_err(|_| format!("invalid buffer capacity '{n}'"))?;
                    } else {
                        return Err(format!("unknown option '{arg}'"));
                    }
                }
            }
        }
        Ok(options)
    }
}

/// Format a drained token stream for printing.
pub fn format_tokens(tokens: &[Token], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(tokens);
    }
    let mut out = String::new();
    for tok in tokens {
        out.push_str(&format!(
            "[{:?}] {} @ {}:{}\n",
            tok.kind,
            tok.text.escape_debug(),
            tok.line,
            tok.column
        ));
    }
    Ok(out)
}

/// Scan `path` and print its tokens. Returns `false` if scanning failed.
pub fn lex_file(path: &str, options: &LexOptions) -> bool {
    let content = read_file(path);
    tracing::debug!(path, bytes = content.len(), "lexing file");

    let tokens = match Scanner::with_config(&content, &options.config).drain() {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint_scan_error(path, &content, &err);
            return false;
        }
    };

    match format_tokens(&tokens, options.json) {
        Ok(out) => {
            print!("{out}");
            true
        }
        Err(err) => {
            eprintln!("error: failed to serialize tokens: {err}");
            false
        }
    }
}
