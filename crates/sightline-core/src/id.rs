//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an edge within a grid's edge list.
///
/// `EdgeId(n)` is the position of the n-th edge discovered during the
/// most recent boundary sweep. Ids are only meaningful until the next
/// rebuild, which discards every edge and allocates ids afresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl EdgeId {
    /// Position of the edge in its list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrips_position() {
        assert_eq!(EdgeId(7).index(), 7);
        assert_eq!(EdgeId(12).to_string(), "12");
    }
}
