//! Widget layout: world size, keypad and slot rows, maze, token material.
//!
//! Every field has a default, so a partial JSON document is a valid layout.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use phone_drop::{ColliderMaterial, SlotBounds};

/// Number of keypad tiles, one per decimal digit.
pub const KEYPAD_TILES: usize = 10;

/// Largest slot row the widget accepts.
pub const MAX_SLOTS: usize = 16;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid layout: {0}")]
    Invalid(String),
}

/// A static cuboid of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub x: f32,
    pub y: f32,
    pub half_width: f32,
    pub half_height: f32,
    #[serde(default)]
    pub rotation: f32,
}

impl ObstacleSpec {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryLayout {
    /// Side of the square world.
    pub world_size: f32,
    /// Number of slots; 10 by default, 11 for the long variant.
    pub slot_count: usize,
    pub tile_size: f32,
    pub tile_gap: f32,
    /// Y of the keypad row centers.
    pub keypad_y: f32,
    /// Y of the slot row centers.
    pub slot_y: f32,
    /// Distance every Empty slot moves per tick.
    pub slot_speed: f32,
    /// Inset of the slot travel range from each side of the world.
    pub slot_margin: f32,
    /// Downward offset from a tile center to a new token.
    pub spawn_clearance: f32,
    pub token_radius: f32,
    pub token_friction: f32,
    pub token_restitution: f32,
    pub token_density: f32,
    pub wall_thickness: f32,
    pub obstacles: Vec<ObstacleSpec>,
    /// Pointer drag strength, as the fraction of the gap closed per tick.
    pub drag_stiffness: f32,
    /// Build the keypad at init instead of waiting for the start prompt.
    pub auto_start: bool,
}

impl Default for EntryLayout {
    fn default() -> Self {
        Self {
            world_size: 500.0,
            slot_count: 10,
            tile_size: 30.0,
            tile_gap: 10.0,
            keypad_y: 30.0,
            slot_y: 450.0,
            slot_speed: 1.5,
            slot_margin: 20.0,
            spawn_clearance: 30.0,
            token_radius: 12.0,
            token_friction: 0.1,
            token_restitution: 0.3,
            token_density: 1.0,
            wall_thickness: 20.0,
            obstacles: default_maze(),
            drag_stiffness: 0.2,
            auto_start: true,
        }
    }
}

/// Three alternating ramps between the keypad and the slot row.
fn default_maze() -> Vec<ObstacleSpec> {
    vec![
        ObstacleSpec { x: 170.0, y: 150.0, half_width: 120.0, half_height: 5.0, rotation: 0.2 },
        ObstacleSpec { x: 330.0, y: 250.0, half_width: 120.0, half_height: 5.0, rotation: -0.2 },
        ObstacleSpec { x: 170.0, y: 350.0, half_width: 120.0, half_height: 5.0, rotation: 0.2 },
    ]
}

impl EntryLayout {
    /// Parse a layout from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn long_variant() -> Self {
        Self {
            slot_count: 11,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(1..=MAX_SLOTS).contains(&self.slot_count) {
            return Err(LayoutError::Invalid(format!(
                "slot_count {} outside 1..={}",
                self.slot_count, MAX_SLOTS
            )));
        }
        let positive = [
            ("world_size", self.world_size),
            ("tile_size", self.tile_size),
            ("token_radius", self.token_radius),
            ("wall_thickness", self.wall_thickness),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !(self.slot_speed.is_finite() && self.slot_speed >= 0.0) {
            return Err(LayoutError::Invalid(format!("slot_speed must be >= 0, got {}", self.slot_speed)));
        }
        if !(self.drag_stiffness > 0.0 && self.drag_stiffness <= 1.0) {
            return Err(LayoutError::Invalid(format!(
                "drag_stiffness must be in (0, 1], got {}",
                self.drag_stiffness
            )));
        }
        if row_width(KEYPAD_TILES, self.tile_size, self.tile_gap) > self.world_size {
            return Err(LayoutError::Invalid("keypad row wider than the world".into()));
        }
        let travel = self.world_size - 2.0 * self.slot_margin;
        if row_width(self.slot_count, self.tile_size, self.tile_gap) > travel {
            return Err(LayoutError::Invalid(format!(
                "{} slots do not fit the {:.0}-unit travel range",
                self.slot_count, travel
            )));
        }
        Ok(())
    }

    /// Centers of the keypad tiles, digit 0 first, centered horizontally.
    pub fn keypad_centers(&self) -> Vec<Vec2> {
        row_centers(KEYPAD_TILES, self.tile_size, self.tile_gap, self.world_size, self.keypad_y)
    }

    /// Initial centers of the slots, index 0 first, centered horizontally.
    pub fn slot_centers(&self) -> Vec<Vec2> {
        row_centers(self.slot_count, self.tile_size, self.tile_gap, self.world_size, self.slot_y)
    }

    /// Travel range of slot centers.
    pub fn slot_bounds(&self) -> SlotBounds {
        let half = self.tile_size / 2.0;
        SlotBounds {
            min_x: self.slot_margin + half,
            max_x: self.world_size - self.slot_margin - half,
        }
    }

    pub fn token_material(&self) -> ColliderMaterial {
        ColliderMaterial {
            restitution: self.token_restitution,
            friction: self.token_friction,
            density: self.token_density,
        }
    }
}

fn row_width(count: usize, size: f32, gap: f32) -> f32 {
    count as f32 * size + count.saturating_sub(1) as f32 * gap
}

fn row_centers(count: usize, size: f32, gap: f32, world: f32, y: f32) -> Vec<Vec2> {
    let start = (world - row_width(count, size, gap)) / 2.0 + size / 2.0;
    (0..count)
        .map(|i| Vec2::new(start + i as f32 * (size + gap), y))
        .collect()
}
