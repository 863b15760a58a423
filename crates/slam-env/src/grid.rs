//! The environment oracle: read-only ground truth plus the movement
//! feasibility check that folds in live peer occupancy.

use std::collections::HashSet;

use slam_core::{Cell, Grid2D, SimRng};

use crate::error::{EnvError, EnvResult};
use crate::tile::TileKind;

/// Immutable ground-truth tile grid plus the entry cells agents spawn at.
///
/// Construction is the only fallible operation; once built, every query is
/// infallible (`tile` returns `OutOfBounds` for coordinates beyond the
/// grid rather than an error, matching §4.1's contract).
pub struct Environment {
    tiles: Grid2D<TileKind>,
    entry_points: Vec<Cell>,
}

impl Environment {
    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.tiles.width()
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.tiles.height()
    }

    #[inline]
    pub fn in_bounds(&self, c: Cell) -> bool {
        self.tiles.in_bounds(c)
    }

    /// The tile at `(x, y)`. Out-of-range coordinates read as `OutOfBounds`.
    #[inline]
    pub fn tile(&self, c: Cell) -> TileKind {
        self.tiles.get(c).copied().unwrap_or(TileKind::OutOfBounds)
    }

    /// Movement feasibility: true if `c` is out of range, a blocking tile, or
    /// currently occupied by some other active agent.
    ///
    /// `occupied` is the set of *other* active agents' current positions —
    /// the caller excludes the agent being evaluated before calling this.
    pub fn is_blocked(&self, c: Cell, occupied: &HashSet<Cell>) -> bool {
        self.tile(c).is_blocking() || occupied.contains(&c)
    }

    pub fn entry_points(&self) -> &[Cell] {
        &self.entry_points
    }
}

/// Fluent builder validating and assembling an [`Environment`].
pub struct EnvironmentBuilder {
    width: i32,
    height: i32,
    rows: Vec<Vec<TileKind>>,
}

impl EnvironmentBuilder {
    /// `rows[y][x]` gives the tile at that coordinate. All rows must have
    /// equal length; the grid must be non-empty.
    pub fn from_rows(rows: Vec<Vec<TileKind>>) -> EnvResult<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(EnvError::InvalidMap("grid has zero rows".into()));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(EnvError::InvalidMap("grid has zero columns".into()));
        }
        if rows.iter().any(|r| r.len() != width) {
            return Err(EnvError::InvalidMap("rows have inconsistent width".into()));
        }

        Ok(Self {
            width: width as i32,
            height: height as i32,
            rows,
        })
    }

    /// Finalize the grid, locating entry points.
    ///
    /// If no `EntryPoint` tile exists, a single randomly chosen traversable
    /// cell is promoted to `EntryPoint`. Fails with `NoEntryPoint` if the
    /// grid has no traversable cell at all.
    pub fn build(self, rng: &mut SimRng) -> EnvResult<Environment> {
        let mut tiles = Grid2D::filled(self.width, self.height, TileKind::OutOfBounds);
        for (y, row) in self.rows.into_iter().enumerate() {
            for (x, tile) in row.into_iter().enumerate() {
                tiles.set(Cell::new(x as i32, y as i32), tile);
            }
        }

        let mut entry_points: Vec<Cell> = tiles
            .iter()
            .filter(|(_, t)| **t == TileKind::EntryPoint)
            .map(|(c, _)| c)
            .collect();

        if entry_points.is_empty() {
            let traversable: Vec<Cell> = tiles
                .iter()
                .filter(|(_, t)| t.is_traversable())
                .map(|(c, _)| c)
                .collect();

            let chosen = *rng.choose(&traversable).ok_or(EnvError::NoEntryPoint)?;
            tiles.set(chosen, TileKind::EntryPoint);
            entry_points.push(chosen);
        }

        Ok(Environment { tiles, entry_points })
    }
}
