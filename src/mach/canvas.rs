/// ## Drawing sink
///
/// The interpreter only ever writes to a canvas. `present` is called once
/// after every line and is where an implementation paces its frames.
pub trait Canvas {
    fn set_colour(&mut self, colour: Colour);
    fn draw_line(&mut self, from: Point, to: Point);
    fn present(&mut self);
    /// Ask the surrounding event loop to stop.
    fn finish(&mut self);
    fn is_finished(&self) -> bool;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour::new(255, 255, 255);
    pub const RED: Colour = Colour::new(255, 0, 0);
    pub const GREEN: Colour = Colour::new(0, 255, 0);
    pub const BLUE: Colour = Colour::new(0, 0, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Colour {
        Colour { red, green, blue }
    }

    /// Build from interpreter values, truncating toward zero and
    /// clamping each channel to 0..=255.
    pub fn from_channels(red: f64, green: f64, blue: f64) -> Colour {
        fn channel(v: f64) -> u8 {
            if v.is_nan() {
                0
            } else {
                v.trunc().max(0.0).min(255.0) as u8
            }
        }
        Colour::new(channel(red), channel(green), channel(blue))
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Colour(Colour),
    Line(Point, Point),
    Present,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Command::Colour(c) => write!(f, "COLOUR {}", c),
            Command::Line(a, b) => write!(f, "LINE {} {}", a, b),
            Command::Present => write!(f, "PRESENT"),
        }
    }
}

/// A canvas that keeps every command it is given.
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<Command>,
    finished: bool,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Line(a, b) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    pub fn colours(&self) -> Vec<Colour> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Colour(c) => Some(*c),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for Recorder {
    fn set_colour(&mut self, colour: Colour) {
        self.commands.push(Command::Colour(colour));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.commands.push(Command::Line(from, to));
    }

    fn present(&mut self) {
        self.commands.push(Command::Present);
    }

    fn finish(&mut self) {
        self.finished = true;
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
