//! Spanish-aware string ordering for listings.
//!
//! Names compare on three levels. The primary key ignores case and accents
//! and places `ñ` right after `n`; spaces and punctuation sort before digits,
//! digits before letters. Ties are broken by accents (unaccented first), then
//! by case (lowercase first), then by the raw strings so the order stays
//! total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

const COMBINING_TILDE: char = '\u{303}';

/// Compare two names for display ordering.
pub fn compare(a: &str, b: &str) -> Ordering {
    let (ka, kb) = (CollationKey::new(a), CollationKey::new(b));
    ka.primary
        .cmp(&kb.primary)
        .then_with(|| ka.accents.cmp(&kb.accents))
        .then_with(|| ka.case.cmp(&kb.case))
        .then_with(|| a.cmp(b))
}

/// Primary collation weights of a string.
pub fn collation_key(s: &str) -> Vec<(u8, u32)> {
    CollationKey::new(s).primary
}

#[derive(Debug, Default)]
struct CollationKey {
    primary: Vec<(u8, u32)>,
    /// Combining marks dropped from each base character, 0 when none.
    accents: Vec<u32>,
    /// One flag per base character, set for upper case.
    case: Vec<bool>,
}

impl CollationKey {
    fn new(s: &str) -> Self {
        let mut key = Self::default();
        let mut chars = s.nfd().peekable();

        while let Some(c) = chars.next() {
            let upper = c.is_uppercase();
            for lower in c.to_lowercase() {
                let mut enye = false;
                let mut marks = 0u32;
                while let Some(&mark) = chars.peek() {
                    if !is_combining_mark(mark) {
                        break;
                    }
                    if lower == 'n' && mark == COMBINING_TILDE && !enye {
                        enye = true;
                    } else {
                        marks = marks.saturating_mul(0x400).saturating_add(u32::from(mark));
                    }
                    chars.next();
                }
                key.primary.push(weight(lower, enye));
                key.accents.push(marks);
                key.case.push(upper);
            }
        }
        key
    }
}

fn is_combining_mark(c: char) -> bool {
    ('\u{300}'..='\u{36f}').contains(&c)
}

fn weight(c: char, enye: bool) -> (u8, u32) {
    if c.is_alphabetic() {
        (2, u32::from(c) * 2 + u32::from(enye))
    } else if c.is_numeric() {
        (1, u32::from(c))
    } else {
        (0, u32::from(c))
    }
}
