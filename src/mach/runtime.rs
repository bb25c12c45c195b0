use super::{Canvas, Config, Dice, Stack, Turtle};
use crate::lang::{parse, Error, Sequence};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter state
///
/// Owns everything a program can touch: the turtle with its variables,
/// the postfix stack, and the random source. Each run starts from a fresh
/// turtle so a runtime can be reused for many programs.
///
/// Without a canvas only the grammar is checked. Turtle motion and loop
/// variables still update but `SET` arithmetic is skipped and nothing is
/// drawn.
pub struct Runtime {
    config: Config,
    turtle: Turtle,
    polish: Stack<f64>,
    dice: Dice,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        let dice = match config.seed {
            Some(seed) => Dice::seeded(seed),
            None => Dice::from_entropy(),
        };
        Runtime {
            turtle: Turtle::new(&config),
            polish: Stack::new(),
            config,
            dice,
        }
    }

    pub fn with_dice(mut self, dice: Dice) -> Runtime {
        self.dice = dice;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    pub fn reset(&mut self) {
        self.turtle = Turtle::new(&self.config);
        self.polish.clear();
    }

    pub fn check(&mut self, source: &str) -> Result<()> {
        self.run_sequence(&mut Sequence::from_str(source), None)
    }

    pub fn draw(&mut self, source: &str, canvas: &mut dyn Canvas) -> Result<()> {
        self.run_sequence(&mut Sequence::from_str(source), Some(canvas))
    }

    pub fn run_sequence(
        &mut self,
        seq: &mut Sequence,
        canvas: Option<&mut dyn Canvas>,
    ) -> Result<()> {
        self.reset();
        debug!(words = seq.len(), attached = canvas.is_some(), "running program");
        let result = parse(seq, self, canvas);
        match &result {
            Ok(()) => debug!(
                x = self.turtle.x(),
                y = self.turtle.y(),
                travelled = self.turtle.travelled(),
                "program finished"
            ),
            Err(error) => debug!(%error, "program failed"),
        }
        result
    }

    pub(crate) fn turtle_mut(&mut self) -> &mut Turtle {
        &mut self.turtle
    }

    pub(crate) fn polish(&self) -> &Stack<f64> {
        &self.polish
    }

    pub(crate) fn polish_mut(&mut self) -> &mut Stack<f64> {
        &mut self.polish
    }

    pub(crate) fn dice_mut(&mut self) -> &mut Dice {
        &mut self.dice
    }
}
