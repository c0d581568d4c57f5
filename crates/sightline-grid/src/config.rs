//! Grid configuration parameters.

use crate::border::BorderBehavior;
use sightline_core::GridError;

/// Configuration for a [`BoundaryGrid`](crate::BoundaryGrid).
///
/// Dimensions are fixed for the lifetime of the grid. Validated by
/// [`BoundaryGrid::with_config`](crate::BoundaryGrid::with_config).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of columns. Must be at least 1.
    pub width: u32,

    /// Number of rows. Must be at least 1.
    pub height: u32,

    /// Side length of one tile in world units.
    ///
    /// Edge endpoints are multiples of this value. Default: 1, so edge
    /// coordinates equal cell-corner indices.
    pub tile_size: u32,

    /// How cells outside the grid behave. Default: [`BorderBehavior::Outline`].
    pub border: BorderBehavior,

    /// Start with every cell occupied instead of every cell empty.
    ///
    /// Useful for carving a map out of solid rock. Default: `false`.
    pub filled: bool,
}

impl GridConfig {
    /// Default tile size: one world unit per cell.
    pub const DEFAULT_TILE_SIZE: u32 = 1;

    /// Create a config for a `width x height` grid.
    ///
    /// Uses default values for all other parameters.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tile_size: Self::DEFAULT_TILE_SIZE,
            border: BorderBehavior::default(),
            filled: false,
        }
    }

    /// Set the tile size in world units.
    pub fn tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Set the border behavior.
    pub fn border(mut self, border: BorderBehavior) -> Self {
        self.border = border;
        self
    }

    /// Set whether every cell starts occupied.
    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Largest dimension, in cells, whose far corner still fits in `i32`
    /// world coordinates at this tile size.
    pub fn max_dim(&self) -> u32 {
        if self.tile_size == 0 {
            return 0;
        }
        i32::MAX as u32 / self.tile_size
    }

    /// Check every parameter.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if self.tile_size == 0 {
            return Err(GridError::InvalidTileSize);
        }
        let max = self.max_dim();
        if self.width > max {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: self.width,
                max,
            });
        }
        if self.height > max {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: self.height,
                max,
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
