/// Rounding for a single scalar (and componentwise for points and sizes).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    Ceil,
    Floor,
    #[default]
    Round,
}

impl Rounding {
    #[inline]
    pub fn apply(self, v: f32) -> f32 {
        match self {
            Rounding::Ceil => v.ceil(),
            Rounding::Floor => v.floor(),
            Rounding::Round => v.round(),
        }
    }

    /// Rounding that moves an edge away from (`outward`) or into its rect,
    /// given whether the edge's outward direction points toward −∞.
    #[inline]
    pub(crate) fn for_edge(outward: bool, outward_is_negative: bool) -> Rounding {
        if outward == outward_is_negative {
            Rounding::Floor
        } else {
            Rounding::Ceil
        }
    }
}

/// Rounding for a rect, which has two edges per axis that may need to move
/// in opposite directions.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum RectSnap {
    /// Every edge moves outward: the result contains the input.
    #[default]
    Extend,
    /// Every edge moves inward: the result is contained by the input.
    Shrink,
    /// Origin and size each round to nearest; no containment either way.
    Round,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply() {
        assert_eq!(Rounding::Ceil.apply(1.2), 2.0);
        assert_eq!(Rounding::Floor.apply(1.8), 1.0);
        assert_eq!(Rounding::Round.apply(1.5), 2.0);
        assert_eq!(Rounding::Round.apply(-1.5), -2.0);
    }

    #[test]
    fn edge_rounding_table() {
        // Left edge (outward is −∞).
        assert_eq!(Rounding::for_edge(true, true), Rounding::Floor);
        assert_eq!(Rounding::for_edge(false, true), Rounding::Ceil);
        // Right edge (outward is +∞).
        assert_eq!(Rounding::for_edge(true, false), Rounding::Ceil);
        assert_eq!(Rounding::for_edge(false, false), Rounding::Floor);
    }

    #[test]
    fn defaults() {
        assert_eq!(Rounding::default(), Rounding::Round);
        assert_eq!(RectSnap::default(), RectSnap::Extend);
    }
}
