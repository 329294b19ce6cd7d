//! Collision layers for each body role.

use crate::core::physics::CollisionLayers;

const KEYPAD_BIT: u32 = 1 << 0;
const TOKEN_BIT: u32 = 1 << 1;
const SLOT_BIT: u32 = 1 << 2;
const OBSTACLE_BIT: u32 = 1 << 3;

/// Keypad tiles are spawn triggers only; nothing collides with them.
pub const KEYPAD: CollisionLayers = CollisionLayers::new(KEYPAD_BIT, 0);
pub const TOKEN: CollisionLayers = CollisionLayers::new(TOKEN_BIT, TOKEN_BIT | SLOT_BIT | OBSTACLE_BIT);
pub const SLOT: CollisionLayers = CollisionLayers::new(SLOT_BIT, TOKEN_BIT);
pub const OBSTACLE: CollisionLayers = CollisionLayers::new(OBSTACLE_BIT, TOKEN_BIT);
