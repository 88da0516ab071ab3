//! Level domain: parse ASCII level rows into cells.

use bevy::prelude::*;

use crate::content::LevelDef;
use crate::level::TileGrid;
use crate::movement::RampContact;

/// Parsed level content, in cell coordinates.
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub grid: TileGrid,
    pub ramps: Vec<(IVec2, RampContact)>,
    pub coins: Vec<IVec2>,
    pub spawn: Option<IVec2>,
}

impl LevelLayout {
    pub fn parse(level: &LevelDef) -> Self {
        let mut layout = Self {
            grid: TileGrid::new(level.cell_size),
            ramps: Vec::new(),
            coins: Vec::new(),
            spawn: None,
        };

        let height = level.rows.len() as i32;
        for (row_index, row) in level.rows.iter().enumerate() {
            let y = height - 1 - row_index as i32;
            for (x, ch) in row.chars().enumerate() {
                let cell = IVec2::new(x as i32, y);
                match ch {
                    '#' => layout.grid.insert(cell),
                    '/' => layout.ramps.push((cell, RampContact::Plus45)),
                    '\\' => layout.ramps.push((cell, RampContact::Minus45)),
                    'c' => layout.coins.push(cell),
                    'P' => {
                        if layout.spawn.is_none() {
                            layout.spawn = Some(cell);
                        }
                    }
                    _ => {}
                }
            }
        }

        layout
    }

    /// World position for the player spawn, or the grid origin cell.
    pub fn spawn_point(&self) -> Vec2 {
        self.grid.cell_center(self.spawn.unwrap_or(IVec2::ZERO))
    }
}
