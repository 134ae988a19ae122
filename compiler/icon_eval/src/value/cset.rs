//! Character sets.

use std::fmt;
use std::rc::Rc;

/// Largest character in the universe `~c` complements over.
const UNIVERSE_MAX: u8 = 255;

/// A set of characters, stored canonically: sorted and deduplicated.
///
/// Two csets are equal exactly when their canonical strings are equal,
/// so `'cab' === 'abcc'`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cset(Rc<str>);

impl Cset {
    pub fn new(chars: &str) -> Self {
        let mut sorted: Vec<char> = chars.chars().collect();
        sorted.sort_unstable();
        sorted.dedup();
        Self::from_sorted(sorted)
    }

    fn from_sorted(chars: Vec<char>) -> Self {
        Cset(chars.into_iter().collect::<String>().into())
    }

    /// Every character with code in `lo..=hi`.
    pub fn range(lo: u8, hi: u8) -> Self {
        Self::from_sorted((lo..=hi).map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.chars().any(|x| x == c)
    }

    #[must_use]
    pub fn union(&self, other: &Cset) -> Cset {
        let mut all: Vec<char> = self.0.chars().chain(other.0.chars()).collect();
        all.sort_unstable();
        all.dedup();
        Self::from_sorted(all)
    }

    #[must_use]
    pub fn difference(&self, other: &Cset) -> Cset {
        Self::from_sorted(self.0.chars().filter(|c| !other.contains(*c)).collect())
    }

    #[must_use]
    pub fn intersection(&self, other: &Cset) -> Cset {
        Self::from_sorted(self.0.chars().filter(|c| other.contains(*c)).collect())
    }

    /// Characters `\x00..=\xff` not in this set. Characters above that
    /// range are dropped.
    #[must_use]
    pub fn complement(&self) -> Cset {
        Self::from_sorted(
            (0..=UNIVERSE_MAX)
                .map(char::from)
                .filter(|c| !self.contains(*c))
                .collect(),
        )
    }
}

impl fmt::Display for Cset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Cset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.0)
    }
}
