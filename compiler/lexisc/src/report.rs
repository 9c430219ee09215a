//! Rendering scan errors as source-annotated diagnostics.

use std::io::IsTerminal;
use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use lexis_core::ScanError;

/// Render `err` against `source` as a diagnostic, without colors.
pub fn render_scan_error(path: &str, source: &str, err: &ScanError) -> String {
    if label_span(source, err).is_none() {
        return plain(path, err);
    }
    let mut out = Vec::new();
    let written = build(path, source, err, false).write((path, Source::from(source)), &mut out);
    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        // Writing to a Vec only fails if ariadne itself does; fall back to the bare message.
        Err(_) => format!("error: {err}\n"),
    }
}

/// Print `err` to stderr, colored when stderr is a terminal.
pub fn eprint_scan_error(path: &str, source: &str, err: &ScanError) {
    if label_span(source, err).is_none() {
        eprint!("{}", plain(path, err));
        return;
    }
    let color = std::io::stderr().is_terminal();
    if build(path, source, err, color)
        .eprint((path, Source::from(source)))
        .is_err()
    {
        eprintln!("error: {err}");
    }
}

/// ariadne prints notes only under a source snippet, so errors without a
/// location are written by hand.
fn plain(path: &str, err: &ScanError) -> String {
    let mut out = format!("error: {}\n  --> {path}\n", headline(err));
    if let Some(note) = note(err) {
        out.push_str(&format!("  = note: {note}\n"));
    }
    out
}

fn build<'a>(
    path: &'a str,
    source: &str,
    err: &ScanError,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let span = label_span(source, err);
    let mut report = Report::build(ReportKind::Error, path, span.as_ref().map_or(0, |s| s.start))
        .with_config(Config::default().with_color(color))
        .with_message(headline(err));

    if let Some(span) = span {
        report = report.with_label(Label::new((path, span)).with_message(label(err)));
    }
    if let Some(note) = note(err) {
        report = report.with_note(note);
    }
    report.finish()
}

/// Character range (ariadne counts characters, not bytes) the label covers.
fn label_span(source: &str, err: &ScanError) -> Option<Range<usize>> {
    let offset = usize::try_from(err.offset()?).ok()?;
    let prefix = source.get(..offset)?;
    let start = prefix.chars().count();
    Some(start..start + 1)
}

fn headline(err: &ScanError) -> String {
    match err {
        ScanError::UnexpectedCharacter { ch, .. } => format!("unexpected character {ch:?}"),
        ScanError::UnterminatedString { .. } => "unterminated string literal".to_string(),
        ScanError::ResourceExhausted { capacity } => {
            format!("token too long (buffer holds {capacity} characters)")
        }
    }
}

fn label(err: &ScanError) -> String {
    match err {
        ScanError::UnexpectedCharacter { .. } => "not part of any token".to_string(),
        ScanError::UnterminatedString { .. } => "string starts here".to_string(),
        ScanError::ResourceExhausted { .. } => String::new(),
    }
}

fn note(err: &ScanError) -> Option<String> {
    match err {
        ScanError::UnexpectedCharacter { .. } => None,
        ScanError::UnterminatedString { .. } => {
            Some("add a closing `\"` before the end of the file".to_string())
        }
        ScanError::ResourceExhausted { capacity } => Some(format!(
            "the token buffer holds {capacity} characters; \
             raise --buffer-capacity or drop --no-buffer-growth"
        )),
    }
}
