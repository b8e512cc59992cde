use std::sync::LazyLock;

use regex::Regex;

use crate::models::Installment;

// Any digit pair joined by '/', '|' or a single space counts, so "Rua 12 34"
// is read as installment 12 of 34.
static INSTALLMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[/| ]([0-9]+)").expect("valid installment pattern"));

/// Extract `(current, total)` from the first digit pair in `title`.
pub fn parse_installment(title: &str) -> Option<Installment> {
    let caps = INSTALLMENT_RE.captures(title)?;
    let current = caps[1].parse().ok()?;
    let total = caps[2].parse().ok()?;
    Some(Installment { current, total })
}
