//! Level domain: tile occupancy grid.

use bevy::prelude::*;
use std::collections::HashSet;

/// Occupied tile cells. Cell (0, 0) spans world [0, cell_size) on both
/// axes, y pointing up.
#[derive(Resource, Debug, Clone)]
pub struct TileGrid {
    pub cell_size: f32,
    tiles: HashSet<IVec2>,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TileGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            tiles: HashSet::new(),
        }
    }

    pub fn insert(&mut self, cell: IVec2) {
        self.tiles.insert(cell);
    }

    pub fn world_to_cell(&self, point: Vec2) -> IVec2 {
        (point / self.cell_size).floor().as_ivec2()
    }

    pub fn cell_center(&self, cell: IVec2) -> Vec2 {
        (cell.as_vec2() + Vec2::splat(0.5)) * self.cell_size
    }

    pub fn has_tile(&self, cell: IVec2) -> bool {
        self.tiles.contains(&cell)
    }

    pub fn has_tile_at(&self, point: Vec2) -> bool {
        self.has_tile(self.world_to_cell(point))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IVec2> {
        self.tiles.iter()
    }

    /// Maximal horizontal runs of occupied cells as `(leftmost cell, length)`,
    /// bottom row first.
    pub fn horizontal_runs(&self) -> Vec<(IVec2, i32)> {
        let mut cells: Vec<IVec2> = self.tiles.iter().copied().collect();
        cells.sort_by_key(|cell| (cell.y, cell.x));

        let mut runs: Vec<(IVec2, i32)> = Vec::new();
        for cell in cells {
            match runs.last_mut() {
                Some((start, len)) if start.y == cell.y && start.x + *len == cell.x => *len += 1,
                _ => runs.push((cell, 1)),
            }
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_cell_floors_negative_coordinates() {
        let grid = TileGrid::new(1.0);
        assert_eq!(grid.world_to_cell(Vec2::new(0.2, 0.9)), IVec2::new(0, 0));
        assert_eq!(grid.world_to_cell(Vec2::new(-0.2, -0.01)), IVec2::new(-1, -1));
        assert_eq!(grid.world_to_cell(Vec2::new(3.0, -2.5)), IVec2::new(3, -3));
    }

    #[test]
    fn test_world_to_cell_respects_cell_size() {
        let grid = TileGrid::new(0.5);
        assert_eq!(grid.world_to_cell(Vec2::new(1.2, 0.4)), IVec2::new(2, 0));
        assert_eq!(grid.cell_center(IVec2::new(2, 0)), Vec2::new(1.25, 0.25));
    }

    #[test]
    fn test_has_tile_at_point() {
        let mut grid = TileGrid::new(1.0);
        grid.insert(IVec2::new(2, 0));
        assert!(grid.has_tile_at(Vec2::new(2.99, 0.01)));
        assert!(!grid.has_tile_at(Vec2::new(3.0, 0.5)));
        assert!(!grid.has_tile_at(Vec2::new(2.5, 1.0)));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_horizontal_runs_merge_neighbours() {
        let mut grid = TileGrid::new(1.0);
        for x in -2..3 {
            grid.insert(IVec2::new(x, 0));
        }
        grid.insert(IVec2::new(5, 0));
        grid.insert(IVec2::new(0, 1));
        grid.insert(IVec2::new(1, 1));

        assert_eq!(
            grid.horizontal_runs(),
            vec![
                (IVec2::new(-2, 0), 5),
                (IVec2::new(5, 0), 1),
                (IVec2::new(0, 1), 2),
            ]
        );
        assert!(TileGrid::default().horizontal_runs().is_empty());
    }
}
