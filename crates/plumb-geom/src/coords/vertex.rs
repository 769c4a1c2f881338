use core::fmt;

/// Corner of a rect. "Top" is the min-Y edge.
///
/// Enumeration order is fixed: top-right, bottom-right, bottom-left,
/// top-left. Bounding-box construction and debug dumps rely on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Vertex {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl Vertex {
    pub const ALL: [Vertex; 4] = [
        Vertex::TopRight,
        Vertex::BottomRight,
        Vertex::BottomLeft,
        Vertex::TopLeft,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Vertex::TopRight => 0,
            Vertex::BottomRight => 1,
            Vertex::BottomLeft => 2,
            Vertex::TopLeft => 3,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Vertex::TopRight => "Top Right",
            Vertex::BottomRight => "Bottom Right",
            Vertex::BottomLeft => "Bottom Left",
            Vertex::TopLeft => "Top Left",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, v) in Vertex::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Vertex::TopRight.to_string(), "Top Right");
        assert_eq!(Vertex::BottomLeft.to_string(), "Bottom Left");
    }
}
