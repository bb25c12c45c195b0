//! # Turtle
//!
//! A small language for steering a drawing turtle around a canvas.
//!
//! ```text
//! { COLOUR RANDCOL DO A FROM 1 TO 50 { FD A RT 62 } }
//! ```
//!
//! Programs are read and run in a single pass. The interpreter stops at the
//! first word it cannot use and reports its position. Drawing goes through
//! the [`Canvas`](mach::Canvas) trait so the same runtime can paint a
//! terminal or record commands for a test.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
