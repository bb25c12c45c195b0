use super::{Config, Point};
use std::f64::consts::PI;

pub const VARIABLES: usize = 26;

const FACE_NORTH: f64 = 90.0;
const DEG_TO_RAD: f64 = PI / 180.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Turn {
    Right,
    Left,
}

/// ## Turtle state
///
/// Heading is in radians with 0 along +x. Variables `A`..`Z` live in
/// `vars[0..26]` and start at zero.

#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    x: f64,
    y: f64,
    heading: f64,
    vars: [f64; VARIABLES],
    travelled: f64,
}

impl Default for Turtle {
    fn default() -> Self {
        Turtle::new(&Config::default())
    }
}

impl Turtle {
    pub fn new(config: &Config) -> Turtle {
        let (x, y) = config.center();
        Turtle {
            x,
            y,
            heading: FACE_NORTH * DEG_TO_RAD,
            vars: [0.0; VARIABLES],
            travelled: 0.0,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn travelled(&self) -> f64 {
        self.travelled
    }

    pub fn vars(&self) -> &[f64; VARIABLES] {
        &self.vars
    }

    pub fn var(&self, index: usize) -> f64 {
        self.vars[index]
    }

    pub fn set_var(&mut self, index: usize, value: f64) {
        self.vars[index] = value;
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    /// Move `distance` along the heading. Returns the start and end points.
    pub fn forward(&mut self, distance: f64) -> (Point, Point) {
        let from = self.position();
        self.x = new_x(distance, self);
        self.y = new_y(distance, self);
        self.travelled += distance;
        (from, self.position())
    }

    pub fn turn(&mut self, degrees: f64, turn: Turn) {
        self.heading = new_heading(self.heading, degrees, turn);
    }
}

pub fn new_x(distance: f64, turtle: &Turtle) -> f64 {
    turtle.x + distance * turtle.heading.cos()
}

pub fn new_y(distance: f64, turtle: &Turtle) -> f64 {
    turtle.y + distance * turtle.heading.sin()
}

/// Rotation is in degrees; the heading is in radians.
pub fn new_heading(heading: f64, degrees: f64, turn: Turn) -> f64 {
    let rotation = degrees * DEG_TO_RAD;
    match turn {
        Turn::Right => heading - rotation,
        Turn::Left => heading + rotation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.0001
    }

    #[test]
    fn test_new_coordinates() {
        let mut t = Turtle::default();
        assert!(close(new_x(20.0, &t), 400.0));
        assert!(close(new_y(20.0, &t), 320.0));
        t.set_heading(0.0);
        assert!(close(new_x(20.0, &t), 420.0));
        assert!(close(new_y(20.0, &t), 300.0));
        t.set_heading(PI);
        assert!(close(new_x(20.0, &t), 380.0));
        assert!(close(new_y(20.0, &t), 300.0));
    }

    #[test]
    fn test_angle_conversions() {
        let right = new_heading(90.0 * DEG_TO_RAD, 20.0, Turn::Right);
        assert!(close(right, 70.0 * DEG_TO_RAD));
        let left = new_heading(70.0 * DEG_TO_RAD, 50.0, Turn::Left);
        assert!(close(left, 120.0 * DEG_TO_RAD));
    }

    #[test]
    fn test_forward_tracks_distance() {
        let mut t = Turtle::default();
        let (from, to) = t.forward(20.0);
        assert_eq!(from, Point::new(400.0, 300.0));
        assert!(close(to.x, 400.0));
        assert!(close(to.y, 320.0));
        t.forward(-5.0);
        assert!(close(t.travelled(), 15.0));
    }
}
