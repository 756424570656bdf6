//! Frozen per-version decoders.
//!
//! Each module reads exactly one published link layout. Once a version has
//! shipped its module is never edited: old links must decode the same way
//! forever. New fields go into a new version.

pub mod v1;
pub mod v2;
pub mod v3;
pub mod v4;
pub mod v5;

/// Top-level slot `index`, empty when the link is shorter.
pub(crate) fn slot<'a>(slots: &[&'a str], index: usize) -> &'a str {
    slots.get(index).copied().unwrap_or("")
}

/// Non-empty record strings from slot `start` on.
pub(crate) fn records<'a>(slots: &[&'a str], start: usize) -> Vec<&'a str> {
    slots
        .iter()
        .skip(start)
        .copied()
        .filter(|r| !r.is_empty())
        .collect()
}
