//! Best-effort repair of ISO 639-1 style language tags.
//!
//! Shape-based only: a usable tag is a two-letter primary subtag followed by
//! optional subtags of one to eight alphanumerics, separated by hyphens.
//! Casing is normalized by subtag shape (two-letter subtags upper-case,
//! four-letter subtags title-case, everything else lower-case). There is no
//! registry lookup; a tag that does not fit the shape is unsalvageable and
//! the caller substitutes the fallback language.

/// Returns the canonical form of `tag`, or `None` when the tag cannot be
/// repaired by case and whitespace normalization alone.
pub fn repair(tag: &str) -> Option<String> {
    let tag = tag.trim();
    let mut parts = tag.split('-');

    let primary = parts.next()?;
    if primary.len() != 2 || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let mut out = primary.to_ascii_lowercase();
    for part in parts {
        if part.is_empty() || part.len() > 8 || !part.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return None;
        }
        out.push('-');
        out.push_str(&case_subtag(part));
    }
    Some(out)
}

/// True when `tag` is already in the form [`repair`] would produce.
pub fn is_canonical(tag: &str) -> bool {
    repair(tag).is_some_and(|fixed| fixed == tag)
}

fn case_subtag(part: &str) -> String {
    let alphabetic = part.bytes().all(|b| b.is_ascii_alphabetic());
    match part.len() {
        2 if alphabetic => part.to_ascii_uppercase(),
        4 if alphabetic => {
            let lower = part.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
                None => lower,
            }
        }
        _ => part.to_ascii_lowercase(),
    }
}
