//! Display-name ordering for catalog records.

use std::cmp::Ordering;

use roster_types::Character;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Locale-style string comparison.
///
/// Three levels, each consulted only when the previous one ties:
/// base letters ignoring accents and case, then accents (unaccented
/// first), then case (lowercase first at the first differing character).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| case_tiebreak(a, b))
}

/// Decomposed, lowercased, combining marks stripped
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    accented(s).filter(|c| !is_combining_mark(*c))
}

/// Decomposed and lowercased, combining marks kept
fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Compares decomposed forms so NFC and NFD spellings of a name tie
fn case_tiebreak(a: &str, b: &str) -> Ordering {
    let mut left = a.nfd();
    let mut right = b.nfd();
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x == y => continue,
            (Some(x), Some(y)) => {
                return match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                };
            }
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
        }
    }
}

/// Sort records ascending by display name. Stable for equal names.
pub fn sort_records(records: &mut [Character]) {
    records.sort_by(|a, b| locale_cmp(&a.display_name, &b.display_name));
}
