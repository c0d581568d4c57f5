//! Error types for grid construction and cell access.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A cell coordinate is outside `[0, width) x [0, height)`.
    OutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// Tile size must be at least one world unit.
    InvalidTileSize,
    /// A dimension would push world coordinates past `i32::MAX`.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The rejected value, in cells.
        value: u32,
        /// Largest accepted value for the configured tile size.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "cell ({x}, {y}) out of range [0, {width}) x [0, {height})")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::InvalidTileSize => write!(f, "tile size must be greater than zero"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_bounds() {
        let e = GridError::OutOfRange {
            x: -1,
            y: 4,
            width: 3,
            height: 3,
        };
        assert_eq!(e.to_string(), "cell (-1, 4) out of range [0, 3) x [0, 3)");
    }

    #[test]
    fn dimension_message() {
        let e = GridError::DimensionTooLarge {
            name: "width",
            value: 10,
            max: 5,
        };
        assert_eq!(e.to_string(), "width 10 exceeds maximum 5");
    }
}
