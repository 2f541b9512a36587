//! Named colours for every sprite.
//!
//! Each literal from the sprite designs lives here exactly once, so that the
//! generators never repeat a raw RGBA tuple.

use crate::colour::Colour;

// Vehicles
pub const CAR_BODY: Colour = Colour::rgb(70, 130, 180);
pub const TRUCK_BODY: Colour = Colour::rgb(220, 20, 60);
pub const TRUCK_CAB: Colour = Colour::rgb(178, 34, 34);
pub const BUS_BODY: Colour = Colour::rgb(255, 215, 0);
pub const BUS_DOOR: Colour = Colour::rgb(218, 165, 32);
pub const GLASS: Colour = Colour::rgb(173, 216, 230);
pub const RIDER: Colour = Colour::rgb(139, 69, 19);

/// Wheels, motorcycle frames and zebra stripes share the same near-black.
pub const TYRE: Colour = Colour::rgb(50, 50, 50);

// Roads
pub const ASPHALT: Colour = Colour::rgb(70, 70, 70);
pub const ASPHALT_DARK: Colour = Colour::rgb(60, 60, 60);
pub const MARKING: Colour = Colour::WHITE;

// Traffic lights
pub const POLE: Colour = Colour::rgb(80, 80, 80);
pub const HOUSING: Colour = Colour::rgb(40, 40, 40);
pub const SIGNAL_RED: Colour = Colour::rgb(255, 0, 0);
pub const SIGNAL_YELLOW: Colour = Colour::rgb(255, 255, 0);
pub const SIGNAL_GREEN: Colour = Colour::rgb(0, 255, 0);
pub const SIGNAL_RED_OFF: Colour = Colour::rgb(100, 0, 0);
pub const SIGNAL_YELLOW_OFF: Colour = Colour::rgb(100, 100, 0);
pub const SIGNAL_GREEN_OFF: Colour = Colour::rgb(0, 100, 0);

// Environment
pub const BRICK: Colour = Colour::rgb(139, 69, 19);
pub const WINDOW_LIT: Colour = Colour::rgb(255, 255, 200);
pub const TIMBER: Colour = Colour::rgb(101, 67, 33);
pub const FOLIAGE: Colour = Colour::rgb(34, 139, 34);

/// Base green the grass texture is perturbed from.
pub const GRASS_BASE: Colour = FOLIAGE;
