use turtle::mach::{Config, Dice, Recorder, Runtime};

#[allow(dead_code)]
pub fn check(source: &str) -> String {
    let mut runtime = Runtime::default();
    match runtime.check(source) {
        Ok(()) => String::new(),
        Err(error) => format!("{}\n", error),
    }
}

#[allow(dead_code)]
pub fn draw(source: &str) -> (Runtime, Recorder, String) {
    draw_seeded(source, 7)
}

#[allow(dead_code)]
pub fn draw_seeded(source: &str, seed: u64) -> (Runtime, Recorder, String) {
    let mut runtime = Runtime::new(Config::default()).with_dice(Dice::seeded(seed));
    let mut recorder = Recorder::new();
    let s = match runtime.draw(source, &mut recorder) {
        Ok(()) => String::new(),
        Err(error) => format!("{}\n", error),
    };
    (runtime, recorder, s)
}

#[allow(dead_code)]
pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.0001
}
