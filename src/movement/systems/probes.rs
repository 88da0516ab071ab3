//! Movement domain: world probe and rigid body adapters for avian2d.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::TileGrid;
use crate::movement::{BodyAccess, GameLayer, RampContact, WorldProbe};

/// Tile and ramp queries around one player origin.
pub(crate) struct LevelProbe<'a, 'w, 's> {
    grid: &'a TileGrid,
    spatial_query: &'a SpatialQuery<'w, 's>,
    shape: &'a Collider,
    origin: Vec2,
}

impl<'a, 'w, 's> LevelProbe<'a, 'w, 's> {
    pub(crate) fn new(
        grid: &'a TileGrid,
        spatial_query: &'a SpatialQuery<'w, 's>,
        shape: &'a Collider,
        origin: Vec2,
    ) -> Self {
        Self {
            grid,
            spatial_query,
            shape,
            origin,
        }
    }

    fn overlaps(&self, layer: GameLayer) -> bool {
        let filter = SpatialQueryFilter::from_mask(layer);
        !self
            .spatial_query
            .shape_intersections(self.shape, self.origin, 0.0, &filter)
            .is_empty()
    }
}

impl WorldProbe for LevelProbe<'_, '_, '_> {
    fn has_tile_at(&self, point: Vec2) -> bool {
        self.grid.has_tile_at(point)
    }

    fn ramp_contact(&self) -> RampContact {
        // +45 wins when both slopes overlap
        if self.overlaps(GameLayer::RampPlus45) {
            RampContact::Plus45
        } else if self.overlaps(GameLayer::RampMinus45) {
            RampContact::Minus45
        } else {
            RampContact::None
        }
    }
}

/// Mutable view over the avian2d body components.
pub(crate) struct AvianBody<'a> {
    pub(crate) velocity: &'a mut LinearVelocity,
    pub(crate) gravity_scale: &'a mut GravityScale,
}

impl BodyAccess for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }
}
