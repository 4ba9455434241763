use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use itertools::{EitherOrBoth, Itertools};

/// Ordering policy for texts that are treated strictly as ASCII.
///
/// Only the plain ASCII uppercase letters `'A'..='Z'` are ever folded; every
/// other character, including non-ASCII ones, is compared by its code point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AsciiComparator {
    /// Case-sensitive: code points are compared as they are.
    #[default]
    Identity,
    /// Case-insensitive: ASCII uppercase letters are compared as lowercase.
    Insensitive,
}

pub const IDENTITY_COMPARATOR: AsciiComparator = AsciiComparator::Identity;
pub const INSENSITIVE_COMPARATOR: AsciiComparator = AsciiComparator::Insensitive;

impl AsciiComparator {
    pub const fn new(insensitive: bool) -> Self {
        if insensitive {
            Self::Insensitive
        } else {
            Self::Identity
        }
    }

    pub const fn is_insensitive(self) -> bool {
        matches!(self, Self::Insensitive)
    }

    /// Fold one character the way this comparator sees it.
    #[inline]
    pub fn fold(self, c: char) -> char {
        if self.is_insensitive() && c.is_ascii_uppercase() {
            char::from(c as u8 + 32)
        } else {
            c
        }
    }

    /// Total order over nullable texts. `None` sorts before every text and
    /// two `None`s are equal.
    pub fn compare(self, a: Option<&str>, b: Option<&str>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.cmp_str(a, b),
        }
    }

    /// Lexicographic order over folded code points; on a common prefix the
    /// shorter text sorts first.
    ///
    /// Characters are compared as whole scalar values, so anything above
    /// U+FFFF sorts after every BMP character (UTF-16 code unit order would
    /// put it among the surrogates, below U+E000..=U+FFFF).
    pub fn cmp_str(self, a: &str, b: &str) -> Ordering {
        for pair in a.chars().zip_longest(b.chars()) {
            match pair {
                EitherOrBoth::Both(c0, c1) => match self.fold(c0).cmp(&self.fold(c1)) {
                    Ordering::Equal => continue,
                    ord => return ord,
                },
                EitherOrBoth::Left(_) => return Ordering::Greater,
                EitherOrBoth::Right(_) => return Ordering::Less,
            }
        }
        Ordering::Equal
    }

    /// Same answer as `compare(a, b) == Ordering::Equal`, without computing an order.
    pub fn equals(self, a: Option<&str>, b: Option<&str>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.eq_str(a, b),
            _ => false,
        }
    }

    pub fn eq_str(self, a: &str, b: &str) -> bool {
        match self {
            Self::Identity => a == b,
            // folding keeps ASCII inside ASCII, so the encoded lengths must match
            Self::Insensitive => a.len() == b.len() && a.eq_ignore_ascii_case(b),
        }
    }

    /// Stable sort of `items` by this comparator.
    pub fn sort<S: AsRef<str>>(self, items: &mut [S]) {
        items.sort_by(|a, b| self.cmp_str(a.as_ref(), b.as_ref()));
    }

    /// Wrap `text` so that it orders, compares and hashes by this comparator.
    pub fn key(self, text: &str) -> AsciiKey<'_> {
        AsciiKey {
            text,
            comparator: self,
        }
    }
}

/// A borrowed text that carries its comparator, usable as a `BTreeMap`,
/// `BTreeSet` or `HashMap` key.
///
/// Two keys are compared by the left-hand key's comparator, so a collection
/// should only ever hold keys built from one comparator.
#[derive(Debug, Clone, Copy)]
pub struct AsciiKey<'a> {
    text: &'a str,
    comparator: AsciiComparator,
}

impl<'a> AsciiKey<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn comparator(&self) -> AsciiComparator {
        self.comparator
    }
}

impl PartialEq for AsciiKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.comparator.eq_str(self.text, other.text)
    }
}

impl Eq for AsciiKey<'_> {}

impl PartialOrd for AsciiKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AsciiKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparator.cmp_str(self.text, other.text)
    }
}

impl Hash for AsciiKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.text.len());
        for b in self.text.bytes() {
            let b = match self.comparator {
                AsciiComparator::Identity => b,
                AsciiComparator::Insensitive => b.to_ascii_lowercase(),
            };
            state.write_u8(b);
        }
    }
}
