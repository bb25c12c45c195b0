use crate::mach::{Canvas, Colour, Config, Point};
use mortal::{Color, Event, Key, PrepareConfig, Screen};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

const PEN: &str = "\u{2588}";

/// Draws onto character cells of the terminal. North is up.
pub struct TermCanvas {
    screen: Screen,
    config: Config,
    finished: Arc<AtomicBool>,
}

impl TermCanvas {
    pub fn new(config: Config, finished: Arc<AtomicBool>) -> io::Result<TermCanvas> {
        let screen = Screen::new(PrepareConfig::default())?;
        screen.clear_screen();
        screen.set_fg(Color::White);
        screen.refresh()?;
        Ok(TermCanvas {
            screen,
            config,
            finished,
        })
    }

    /// Hold the picture until the user quits.
    pub fn wait(&mut self) -> io::Result<()> {
        let size = self.screen.size();
        let hint = "q to quit";
        if size.lines > 0 && size.columns > hint.len() {
            self.screen.set_fg(Color::White);
            self.screen.write_at((size.lines - 1, size.columns - hint.len()), hint);
            self.screen.refresh()?;
        }
        while !self.is_finished() {
            self.poll(Duration::from_millis(100))?;
        }
        Ok(())
    }

    fn poll(&mut self, timeout: Duration) -> io::Result<()> {
        match self.screen.read_event(Some(timeout))? {
            Some(Event::Key(Key::Char('q')))
            | Some(Event::Key(Key::Escape))
            | Some(Event::Key(Key::Ctrl('c'))) => self.finish(),
            Some(Event::Signal(_)) => self.finish(),
            _ => {}
        }
        Ok(())
    }
}

impl Canvas for TermCanvas {
    fn set_colour(&mut self, colour: Colour) {
        self.screen.set_fg(nearest(colour));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        if self.is_finished() {
            return;
        }
        let size = self.screen.size();
        let grid = Grid {
            width: self.config.width as f64,
            height: self.config.height as f64,
            lines: size.lines,
            columns: size.columns,
        };
        for cell in grid.raster(from, to) {
            self.screen.write_at(cell, PEN);
        }
    }

    fn present(&mut self) {
        if self.is_finished() {
            return;
        }
        if let Err(error) = self.screen.refresh() {
            warn!(%error, "terminal refresh failed");
            self.finish();
            return;
        }
        if let Err(error) = self.poll(self.config.delay) {
            warn!(%error, "terminal read failed");
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.finished.store(true, Ordering::SeqCst);
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

/// Maps canvas coordinates onto a `lines` by `columns` cell grid.
struct Grid {
    width: f64,
    height: f64,
    lines: usize,
    columns: usize,
}

impl Grid {
    fn cell(&self, p: Point) -> (f64, f64) {
        let column = p.x / self.width * self.columns as f64;
        let line = (self.height - p.y) / self.height * self.lines as f64;
        (line, column)
    }

    /// Cut the segment down to the part inside the grid.
    fn clip(&self, a: (f64, f64), b: (f64, f64)) -> Option<((f64, f64), (f64, f64))> {
        let (dl, dc) = (b.0 - a.0, b.1 - a.1);
        let edges = [
            (-dl, a.0),
            (dl, self.lines as f64 - a.0),
            (-dc, a.1),
            (dc, self.columns as f64 - a.1),
        ];
        let (mut enter, mut leave) = (0.0f64, 1.0f64);
        for &(p, q) in edges.iter() {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                enter = enter.max(t);
            } else {
                leave = leave.min(t);
            }
            if enter > leave {
                return None;
            }
        }
        Some((
            (a.0 + enter * dl, a.1 + enter * dc),
            (a.0 + leave * dl, a.1 + leave * dc),
        ))
    }

    /// Cells along the segment, clipped to the grid.
    fn raster(&self, from: Point, to: Point) -> Vec<(usize, usize)> {
        let a = self.cell(from);
        let b = self.cell(to);
        if !(a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite()) {
            return vec![];
        }
        let ((l0, c0), (l1, c1)) = match self.clip(a, b) {
            Some(segment) => segment,
            None => return vec![],
        };
        let steps = (l1 - l0).abs().max((c1 - c0).abs()).ceil().max(1.0) as usize;
        let mut cells = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let (i, n) = (i as f64, steps as f64);
            let line = (l0 + (l1 - l0) * i / n).floor();
            let column = (c0 + (c1 - c0) * i / n).floor();
            if line < 0.0 || column < 0.0 {
                continue;
            }
            let cell = (line as usize, column as usize);
            if cell.0 < self.lines && cell.1 < self.columns && cells.last() != Some(&cell) {
                cells.push(cell);
            }
        }
        cells
    }
}

const PALETTE: [(Color, Colour); 8] = [
    (Color::Black, Colour::new(0, 0, 0)),
    (Color::Red, Colour::new(255, 0, 0)),
    (Color::Green, Colour::new(0, 255, 0)),
    (Color::Yellow, Colour::new(255, 255, 0)),
    (Color::Blue, Colour::new(0, 0, 255)),
    (Color::Magenta, Colour::new(255, 0, 255)),
    (Color::Cyan, Colour::new(0, 255, 255)),
    (Color::White, Colour::new(255, 255, 255)),
];

/// Closest of the eight terminal colours by squared distance.
fn nearest(colour: Colour) -> Color {
    let distance = |c: &Colour| {
        let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2);
        d(c.red, colour.red) + d(c.green, colour.green) + d(c.blue, colour.blue)
    };
    let mut best = PALETTE[0];
    for entry in PALETTE.iter() {
        if distance(&entry.1) < distance(&best.1) {
            best = *entry;
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid {
            width: 800.0,
            height: 600.0,
            lines: 30,
            columns: 80,
        }
    }

    #[test]
    fn test_vertical_line_goes_up() {
        let cells = grid().raster(Point::new(400.0, 300.0), Point::new(400.0, 340.0));
        assert_eq!(cells.first(), Some(&(15, 40)));
        assert_eq!(cells.last(), Some(&(13, 40)));
        assert_eq!(cells.len(), 3);
    }

    #[test]
    fn test_clipped_to_grid() {
        let cells = grid().raster(Point::new(-100.0, 300.0), Point::new(900.0, 300.0));
        assert_eq!(cells.len(), 80);
        assert!(cells.iter().all(|&(l, c)| l == 15 && c < 80));
    }

    #[test]
    fn test_long_segment_keeps_visible_cells() {
        let cells = grid().raster(Point::new(-1.0e9, 300.0), Point::new(1.0e9, 300.0));
        assert_eq!(cells.len(), 80);
        assert_eq!(cells.first(), Some(&(15, 0)));
        assert_eq!(cells.last(), Some(&(15, 79)));
    }

    #[test]
    fn test_segment_outside_grid() {
        let cells = grid().raster(Point::new(-50.0, 300.0), Point::new(-10.0, 900.0));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_non_finite_points() {
        let cells = grid().raster(Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_nearest_colour() {
        assert_eq!(nearest(Colour::RED), Color::Red);
        assert_eq!(nearest(Colour::new(250, 240, 10)), Color::Yellow);
        assert_eq!(nearest(Colour::new(20, 20, 30)), Color::Black);
        assert_eq!(nearest(Colour::new(0, 200, 210)), Color::Cyan);
    }
}
