//! Occupancy grid and boundary-edge extraction.

use crate::border::BorderBehavior;
use crate::config::GridConfig;
use crate::sweep::SweepCache;
use log::{debug, trace};
use sightline_core::{Direction, Edge, EdgeId, GridError, GridPoint};

/// A fixed-size grid of occupied/empty tiles together with the merged
/// boundary edges outlining its occupied regions.
///
/// Cells are addressed `(x, y)` with `0 <= x < width`, `0 <= y < height`;
/// `y` grows south. Edge coordinates are in world units: cell `(x, y)`
/// covers `[x * ts, (x + 1) * ts] x [y * ts, (y + 1) * ts]` for tile
/// size `ts`.
///
/// The edge list is rebuilt synchronously by every call that changes
/// occupancy, so [`edges`](Self::edges) is never stale.
///
/// # Examples
///
/// ```
/// use sightline_core::Edge;
/// use sightline_grid::{BoundaryGrid, GridConfig};
///
/// let mut grid = BoundaryGrid::with_config(GridConfig::new(3, 3).tile_size(10)).unwrap();
/// grid.set(1, 1, true);
/// assert_eq!(
///     grid.edges(),
///     &[
///         Edge::from_coords(10, 10, 20, 10), // north
///         Edge::from_coords(10, 20, 20, 20), // south
///         Edge::from_coords(20, 10, 20, 20), // east
///         Edge::from_coords(10, 10, 10, 20), // west
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct BoundaryGrid {
    width: u32,
    height: u32,
    tile_size: u32,
    border: BorderBehavior,
    /// Column-major occupancy: cell `(x, y)` lives at `x * height + y`.
    cells: Vec<bool>,
    edges: Vec<Edge>,
    sweep: SweepCache,
    revision: u64,
}

impl BoundaryGrid {
    /// Initial edge-list capacity, matching a moderately busy screen-sized map.
    const INITIAL_EDGE_CAPACITY: usize = 512;

    /// Create an empty `width x height` grid with unit tiles and the
    /// default [`BorderBehavior`].
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::with_config(GridConfig::new(width, height))
    }

    /// Create a grid from a validated [`GridConfig`].
    ///
    /// When `config.filled` is set every cell starts occupied and the
    /// edge list is built before returning.
    pub fn with_config(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let mut grid = Self {
            width: config.width,
            height: config.height,
            tile_size: config.tile_size,
            border: config.border,
            cells: vec![config.filled; config.cell_count()],
            edges: Vec::with_capacity(Self::INITIAL_EDGE_CAPACITY),
            sweep: SweepCache::default(),
            revision: 0,
        };
        if config.filled {
            grid.calculate_edges();
        }
        Ok(grid)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Side length of one tile in world units.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Border behavior used by edge extraction.
    pub fn border_behavior(&self) -> BorderBehavior {
        self.border
    }

    /// World-space extent of the whole grid (its south-east corner).
    pub fn world_size(&self) -> GridPoint {
        let ts = self.tile_size as i32;
        GridPoint::new(self.width as i32 * ts, self.height as i32 * ts)
    }

    /// The current boundary edges, in discovery order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edge rebuilds performed so far.
    ///
    /// Consumers caching anything derived from [`edges`](Self::edges) can
    /// compare revisions instead of edge lists to detect a change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Occupancy of cell `(x, y)`.
    ///
    /// Returns `Err(GridError::OutOfRange)` for coordinates outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Result<bool, GridError> {
        let cell = self.checked_index(x, y)?;
        Ok(self.cells[cell])
    }

    /// Set occupancy of cell `(x, y)`, rebuilding edges if it changed.
    ///
    /// Writes outside the grid are ignored: no error, no mutation, no
    /// rebuild. Use [`try_set`](Self::try_set) to have them reported.
    pub fn set(&mut self, x: i32, y: i32, value: bool) {
        if self.try_set(x, y, value).is_err() {
            trace!("ignoring write to out-of-range cell ({x}, {y})");
        }
    }

    /// Set occupancy of cell `(x, y)`, rebuilding edges if it changed.
    ///
    /// Returns whether the occupancy changed, or
    /// `Err(GridError::OutOfRange)` without touching the grid.
    pub fn try_set(&mut self, x: i32, y: i32, value: bool) -> Result<bool, GridError> {
        let cell = self.checked_index(x, y)?;
        if self.cells[cell] == value {
            return Ok(false);
        }
        self.cells[cell] = value;
        self.calculate_edges();
        Ok(true)
    }

    /// Set every cell to `value` with a single rebuild.
    pub fn fill(&mut self, value: bool) {
        self.cells.fill(value);
        self.calculate_edges();
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over occupied cells in sweep order (x outer, y inner).
    pub fn occupied_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let height = self.height as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(i, _)| ((i / height) as u32, (i % height) as u32))
    }

    /// The cell containing world position `(wx, wy)`, if inside the grid.
    ///
    /// Positions on a shared tile boundary belong to the tile to the
    /// south-east.
    pub fn cell_at(&self, wx: f64, wy: f64) -> Option<(u32, u32)> {
        let ts = f64::from(self.tile_size);
        let cx = (wx / ts).floor();
        let cy = (wy / ts).floor();
        let in_range = |v: f64, len: u32| v >= 0.0 && v < f64::from(len);
        if in_range(cx, self.width) && in_range(cy, self.height) {
            Some((cx as u32, cy as u32))
        } else {
            None
        }
    }

    /// World-space corners `(north-west, south-east)` of cell `(x, y)`.
    pub fn cell_bounds(&self, x: i32, y: i32) -> Result<(GridPoint, GridPoint), GridError> {
        self.checked_index(x, y)?;
        let ts = self.tile_size as i32;
        Ok((
            GridPoint::new(x * ts, y * ts),
            GridPoint::new((x + 1) * ts, (y + 1) * ts),
        ))
    }

    /// Rebuild the edge list from the current occupancy.
    ///
    /// Sweeps columns west to east and, within a column, rows north to
    /// south. Every exposed side of an occupied cell either extends the
    /// matching edge of an already-visited neighbour or starts a new edge:
    /// north/south sides extend from the west neighbour, east/west sides
    /// from the north neighbour. Both neighbours precede the cell in sweep
    /// order, so one pass yields maximal edges.
    ///
    /// The result depends only on occupancy, never on the previous edge
    /// list.
    pub fn calculate_edges(&mut self) {
        self.edges.clear();
        self.sweep.reset(self.cells.len());
        self.revision += 1;

        for x in 0..self.width {
            for y in 0..self.height {
                let cell = self.index(x, y);
                if !self.cells[cell] {
                    continue;
                }
                let west = self.neighbour(x, y, Direction::West);
                let north = self.neighbour(x, y, Direction::North);

                for side in Direction::ALL {
                    if self.exists(self.neighbour(x, y, side)) {
                        continue;
                    }
                    let source = if side.is_horizontal() { west } else { north };
                    let cached = source.and_then(|n| self.sweep.get(n, side));
                    let id = match cached {
                        Some(id) => {
                            self.extend(id, side);
                            id
                        }
                        None => self.push_edge(x, y, side),
                    };
                    self.sweep.record(cell, side, id);
                }
            }
        }

        debug!(
            "rebuilt {} edges for {}x{} grid ({} occupied)",
            self.edges.len(),
            self.width,
            self.height,
            self.occupied_count()
        );
    }

    fn index(&self, x: u32, y: u32) -> usize {
        x as usize * self.height as usize + y as usize
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(ux), Ok(uy)) if ux < self.width && uy < self.height => Ok(self.index(ux, uy)),
            _ => Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Flat index of the neighbour across `side`, or `None` for a
    /// virtual cell beyond the border.
    fn neighbour(&self, x: u32, y: u32, side: Direction) -> Option<usize> {
        let (dx, dy) = side.offset();
        let nx = x.checked_add_signed(dx).filter(|&v| v < self.width)?;
        let ny = y.checked_add_signed(dy).filter(|&v| v < self.height)?;
        Some(self.index(nx, ny))
    }

    fn exists(&self, neighbour: Option<usize>) -> bool {
        match neighbour {
            Some(i) => self.cells[i],
            None => self.border.virtual_cell_exists(),
        }
    }

    fn extend(&mut self, id: EdgeId, side: Direction) {
        let ts = self.tile_size as i32;
        let edge = &mut self.edges[id.index()];
        if side.is_horizontal() {
            edge.end.x += ts;
        } else {
            edge.end.y += ts;
        }
    }

    fn push_edge(&mut self, x: u32, y: u32, side: Direction) -> EdgeId {
        let ts = self.tile_size as i32;
        let (x0, y0) = (x as i32 * ts, y as i32 * ts);
        let (x1, y1) = (x0 + ts, y0 + ts);
        let edge = match side {
            Direction::North => Edge::from_coords(x0, y0, x1, y0),
            Direction::South => Edge::from_coords(x0, y1, x1, y1),
            Direction::East => Edge::from_coords(x1, y0, x1, y1),
            Direction::West => Edge::from_coords(x0, y0, x0, y1),
        };
        let id = EdgeId(self.edges.len());
        self.edges.push(edge);
        id
    }
}
