//! How the grid border takes part in edge extraction.

/// How cells outside the grid behave when deciding whether a border cell
/// needs an edge on its outward side.
///
/// Out-of-range cells are never stored and never carry cached edges, so
/// an edge is never extended *from* them under either behavior.
///
/// # Examples
///
/// ```
/// use sightline_grid::{BorderBehavior, BoundaryGrid, GridConfig};
///
/// // Outline: a fully occupied grid is outlined by its outer rectangle.
/// let mut outline = BoundaryGrid::with_config(GridConfig::new(4, 3).filled(true)).unwrap();
/// assert_eq!(outline.edges().len(), 4);
///
/// // Sealed: the outside is wall too, so nothing is exposed.
/// let sealed = BoundaryGrid::with_config(
///     GridConfig::new(4, 3).filled(true).border(BorderBehavior::Sealed),
/// )
/// .unwrap();
/// assert!(sealed.edges().is_empty());
///
/// // Carving a hole exposes the same four faces under both behaviors.
/// outline.set(1, 1, false);
/// assert_eq!(outline.edges().len(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderBehavior {
    /// Out-of-range cells are empty: border cells emit an edge on every
    /// outward side, outlining the grid's extent.
    #[default]
    Outline,
    /// Out-of-range cells are solid wall: border cells never emit an edge
    /// on an outward side.
    Sealed,
}

impl BorderBehavior {
    /// Whether a virtual cell beyond the grid counts as occupied.
    pub fn virtual_cell_exists(self) -> bool {
        match self {
            BorderBehavior::Outline => false,
            BorderBehavior::Sealed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_outline() {
        assert_eq!(BorderBehavior::default(), BorderBehavior::Outline);
    }

    #[test]
    fn virtual_occupancy() {
        assert!(!BorderBehavior::Outline.virtual_cell_exists());
        assert!(BorderBehavior::Sealed.virtual_cell_exists());
    }
}
