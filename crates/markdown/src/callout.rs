//! GitHub style callouts: a blockquote whose first line is `[!TYPE]`.

use once_cell::sync::Lazy;
use quire_idf::AdmonitionKind;
use regex::Regex;

static CALLOUT_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[ \t]*\[!([a-z]+)\][ \t]*").expect("callout pattern is valid")
});

/// A recognised marker at the start of a blockquote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callout {
    pub kind: AdmonitionKind,
    /// Bytes of the first line taken up by the marker and trailing blanks.
    pub marker_len: usize,
}

/// Only the five closed types qualify; `[!UNKNOWN]` is not a callout.
pub fn detect_callout(first_line: &str) -> Option<Callout> {
    let captures = CALLOUT_MARKER.captures(first_line)?;
    let kind = captures.get(1)?.as_str().parse::<AdmonitionKind>().ok()?;
    let marker_len = captures.get(0)?.end();
    Some(Callout { kind, marker_len })
}
