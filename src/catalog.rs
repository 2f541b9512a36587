//! The fixed catalogue of generated sprites.
//!
//! Every output file the tool produces is listed here once, with its
//! category, dimensions and draw routine. The pipeline iterates this table;
//! nothing else decides what gets generated or where it lands.

use std::path::PathBuf;

use crate::canvas::Canvas;
use crate::sprites::{environment, lights, roads, vehicles};

/// Output category; each one maps to a directory under `assets/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Vehicles,
    Roads,
    Lights,
    Environment,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Vehicles,
        Category::Roads,
        Category::Lights,
        Category::Environment,
    ];

    /// Directory this category's sprites are written to.
    pub fn dir(self) -> &'static str {
        match self {
            Category::Vehicles => "assets/vehicles",
            Category::Roads => "assets/roads",
            Category::Lights => "assets/lights",
            Category::Environment => "assets/environment",
        }
    }

    /// Human-readable label for status output.
    pub fn label(self) -> &'static str {
        match self {
            Category::Vehicles => "vehicles",
            Category::Roads => "roads",
            Category::Lights => "traffic lights",
            Category::Environment => "environment",
        }
    }
}

/// One catalogue entry: a named sprite with fixed dimensions and the routine
/// that draws it.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub name: &'static str,
    pub category: Category,
    pub width: u32,
    pub height: u32,
    pub draw: fn() -> Canvas,
}

impl Sprite {
    /// Path of the output file, relative to the project root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.category.dir()).join(format!("{}.png", self.name))
    }
}

/// Every sprite the tool generates, in emission order.
pub const CATALOG: [Sprite; 14] = [
    Sprite {
        name: "car",
        category: Category::Vehicles,
        width: 32,
        height: 32,
        draw: vehicles::car,
    },
    Sprite {
        name: "truck",
        category: Category::Vehicles,
        width: 40,
        height: 32,
        draw: vehicles::truck,
    },
    Sprite {
        name: "motorcycle",
        category: Category::Vehicles,
        width: 24,
        height: 32,
        draw: vehicles::motorcycle,
    },
    Sprite {
        name: "bus",
        category: Category::Vehicles,
        width: 48,
        height: 32,
        draw: vehicles::bus,
    },
    Sprite {
        name: "road_horizontal",
        category: Category::Roads,
        width: 128,
        height: 64,
        draw: roads::horizontal,
    },
    Sprite {
        name: "road_vertical",
        category: Category::Roads,
        width: 64,
        height: 128,
        draw: roads::vertical,
    },
    Sprite {
        name: "intersection",
        category: Category::Roads,
        width: 64,
        height: 64,
        draw: roads::intersection,
    },
    Sprite {
        name: "zebra_crossing",
        category: Category::Roads,
        width: 64,
        height: 32,
        draw: roads::zebra,
    },
    Sprite {
        name: "traffic_light_red",
        category: Category::Lights,
        width: 24,
        height: 64,
        draw: lights::red,
    },
    Sprite {
        name: "traffic_light_yellow",
        category: Category::Lights,
        width: 24,
        height: 64,
        draw: lights::yellow,
    },
    Sprite {
        name: "traffic_light_green",
        category: Category::Lights,
        width: 24,
        height: 64,
        draw: lights::green,
    },
    Sprite {
        name: "building",
        category: Category::Environment,
        width: 64,
        height: 96,
        draw: environment::building,
    },
    Sprite {
        name: "tree",
        category: Category::Environment,
        width: 32,
        height: 48,
        draw: environment::tree,
    },
    Sprite {
        name: "grass",
        category: Category::Environment,
        width: 64,
        height: 64,
        draw: environment::grass,
    },
];
