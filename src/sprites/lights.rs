//! Traffic light sprites.
//!
//! One 24x64 template shared by all three states: pole, housing, three
//! stacked lamps. The lamp boxes overlap by 4px vertically, so draw order
//! matters: all three lamps go down dim-or-bright top to bottom, then the
//! active lamp is drawn once more on top so its full disc reads as lit.

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::palette;

/// Which lamp is lit. A fixed enumeration, not a runtime state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Red,
    Yellow,
    Green,
}

impl Signal {
    pub const ALL: [Signal; 3] = [Signal::Red, Signal::Yellow, Signal::Green];

    /// Full-brightness lamp colour.
    pub fn bright(self) -> Colour {
        match self {
            Signal::Red => palette::SIGNAL_RED,
            Signal::Yellow => palette::SIGNAL_YELLOW,
            Signal::Green => palette::SIGNAL_GREEN,
        }
    }

    /// Unlit lamp colour (a dim shade of the same family).
    pub fn dim(self) -> Colour {
        match self {
            Signal::Red => palette::SIGNAL_RED_OFF,
            Signal::Yellow => palette::SIGNAL_YELLOW_OFF,
            Signal::Green => palette::SIGNAL_GREEN_OFF,
        }
    }

    /// Inclusive bounding box of this lamp on the 24x64 template.
    fn lamp_box(self) -> (i32, i32, i32, i32) {
        match self {
            Signal::Red => (6, 6, 18, 18),
            Signal::Yellow => (6, 14, 18, 26),
            Signal::Green => (6, 22, 18, 34),
        }
    }
}

/// Traffic light, 24x64, with the given signal lit.
pub fn traffic_light(active: Signal) -> Canvas {
    let mut canvas = Canvas::new(24, 64, Colour::TRANSPARENT);

    canvas.fill_rect(10, 32, 14, 64, palette::POLE);
    canvas.fill_rect(4, 4, 20, 36, palette::HOUSING);

    for signal in Signal::ALL {
        let (x0, y0, x1, y1) = signal.lamp_box();
        let colour = if signal == active {
            signal.bright()
        } else {
            signal.dim()
        };
        canvas.fill_ellipse(x0, y0, x1, y1, colour);
    }

    // Glow pass: restore the active lamp where a lower lamp overlapped it.
    let (x0, y0, x1, y1) = active.lamp_box();
    canvas.fill_ellipse(x0, y0, x1, y1, active.bright());

    canvas
}

pub fn red() -> Canvas {
    traffic_light(Signal::Red)
}

pub fn yellow() -> Canvas {
    traffic_light(Signal::Yellow)
}

pub fn green() -> Canvas {
    traffic_light(Signal::Green)
}
