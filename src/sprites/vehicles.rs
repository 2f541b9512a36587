//! Vehicle sprites: car, truck, motorcycle and bus.
//!
//! All vehicles are drawn top-down on a transparent canvas, body first,
//! glass over the body, wheels last.

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::palette;

/// Car, 32x32.
pub fn car() -> Canvas {
    let mut canvas = Canvas::new(32, 32, Colour::TRANSPARENT);

    canvas.fill_rect(4, 10, 28, 22, palette::CAR_BODY);
    canvas.fill_rect(8, 12, 24, 20, palette::GLASS);

    canvas.fill_ellipse(4, 8, 10, 14, palette::TYRE);
    canvas.fill_ellipse(4, 18, 10, 24, palette::TYRE);
    canvas.fill_ellipse(22, 8, 28, 14, palette::TYRE);
    canvas.fill_ellipse(22, 18, 28, 24, palette::TYRE);

    canvas
}

/// Truck, 40x32. Cab and windscreen sit at the front (right) end.
pub fn truck() -> Canvas {
    let mut canvas = Canvas::new(40, 32, Colour::TRANSPARENT);

    canvas.fill_rect(4, 8, 36, 24, palette::TRUCK_BODY);
    canvas.fill_rect(28, 10, 36, 22, palette::TRUCK_CAB);
    canvas.fill_rect(30, 12, 34, 20, palette::GLASS);

    for x in [6, 18, 30] {
        canvas.fill_ellipse(x, 6, x + 6, 12, palette::TYRE);
        canvas.fill_ellipse(x, 20, x + 6, 26, palette::TYRE);
    }

    canvas
}

/// Motorcycle, 24x32.
pub fn motorcycle() -> Canvas {
    let mut canvas = Canvas::new(24, 32, Colour::TRANSPARENT);

    canvas.fill_rect(8, 12, 16, 20, palette::TYRE);
    canvas.fill_ellipse(10, 8, 14, 12, palette::RIDER);

    canvas.fill_ellipse(6, 6, 12, 12, palette::TYRE);
    canvas.fill_ellipse(6, 20, 12, 26, palette::TYRE);

    canvas
}

/// Bus, 48x32. Six windows at a 6px stride, door at the rear.
pub fn bus() -> Canvas {
    let mut canvas = Canvas::new(48, 32, Colour::TRANSPARENT);

    canvas.fill_rect(4, 6, 44, 26, palette::BUS_BODY);

    for i in 0..6 {
        let x = 8 + i * 6;
        canvas.fill_rect(x, 10, x + 4, 18, palette::GLASS);
    }

    canvas.fill_rect(40, 10, 44, 22, palette::BUS_DOOR);

    canvas.fill_ellipse(8, 4, 14, 10, palette::TYRE);
    canvas.fill_ellipse(8, 22, 14, 28, palette::TYRE);
    canvas.fill_ellipse(34, 4, 40, 10, palette::TYRE);
    canvas.fill_ellipse(34, 22, 40, 28, palette::TYRE);

    canvas
}
