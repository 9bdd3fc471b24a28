//! Neighbourhood evaluation counts.

/// Same-category and different-category occupied neighbours of one cell.
///
/// Transient: recomputed on every query, never stored across sweeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Occupied neighbours sharing the queried agent's category.
    pub similar: u32,
    /// Occupied neighbours of any other category.
    pub different: u32,
}

impl Evaluation {
    /// Total occupied neighbours.
    pub fn total(&self) -> u32 {
        self.similar + self.different
    }

    /// `true` when the agent has no occupied neighbours at all.
    pub fn is_isolated(&self) -> bool {
        self.total() == 0
    }

    /// `similar / (similar + different)`, or `None` for an isolated agent.
    pub fn similarity(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(f64::from(self.similar) / f64::from(total)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_has_no_similarity() {
        let e = Evaluation::default();
        assert!(e.is_isolated());
        assert_eq!(e.similarity(), None);
    }

    #[test]
    fn similarity_is_fraction_of_occupied() {
        let e = Evaluation {
            similar: 3,
            different: 1,
        };
        assert_eq!(e.total(), 4);
        assert_eq!(e.similarity(), Some(0.75));
    }
}
