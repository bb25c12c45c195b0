use crate::mach::{Canvas, Recorder, Runtime};

mod set_test;

fn run(runtime: &mut Runtime, source: &str) -> (Recorder, String) {
    let mut recorder = Recorder::new();
    let s = match runtime.draw(source, &mut recorder) {
        Ok(()) => String::new(),
        Err(error) => format!("{}\n", error),
    };
    (recorder, s)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.0001
}
