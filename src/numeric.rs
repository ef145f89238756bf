//! Canonical re-rendering of numeric lexical values.
//!
//! Values reach this module as the raw strings found in a document. A value
//! that parses is re-rendered in one canonical spelling; a value that does
//! not parse yields `None` and the caller substitutes the type's fallback.

/// Canonical spelling of a binary floating-point value. Non-finite values
/// (`NaN`, infinities) are rejected: they have no place in a document and
/// take the fallback like any other unparseable text.
pub fn canonical_float(text: &str) -> Option<String> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then(|| format!("{value:?}"))
}

/// Canonical spelling of an integer value. Parses through `i128`, which
/// covers every value the element types can hold; anything beyond that is
/// treated as unparseable.
pub fn canonical_integer(text: &str) -> Option<String> {
    let value: i128 = text.trim().parse().ok()?;
    Some(value.to_string())
}
