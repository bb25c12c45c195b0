/*!
## Rust Machine Module

This Rust module holds the turtle, its canvas, and the runtime that
drives them from a parsed program.

*/

mod canvas;
mod config;
mod dice;
mod runtime;
mod stack;
mod turtle;

pub use canvas::Canvas;
pub use canvas::Colour;
pub use canvas::Command;
pub use canvas::Point;
pub use canvas::Recorder;
pub use config::Config;
pub use dice::Dice;
pub use runtime::Runtime;
pub use stack::Stack;
pub use turtle::{new_heading, new_x, new_y, Turn, Turtle, VARIABLES};

#[cfg(test)]
mod tests;
