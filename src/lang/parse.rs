use super::{sequence::Sequence, token::*, Error, ErrorCode};
use crate::error;
use crate::mach::{Canvas, Colour, Runtime, Turn};
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

/// Recognize and run a whole program in one pass.
///
/// Every rule validates the word under the cursor and applies its effect
/// straight away; there is no syntax tree. Postfix arithmetic and `SET`
/// only evaluate when a canvas is attached. On the first failure the
/// canvas is told to finish and nothing more runs.
pub fn parse<'a, 'c>(
    seq: &'a mut Sequence,
    runtime: &'a mut Runtime,
    canvas: Option<&'a mut (dyn Canvas + 'c)>,
) -> Result<()> {
    let mut parser = Parser {
        seq,
        runtime,
        canvas,
    };
    let result = parser.program();
    if result.is_err() {
        if let Some(canvas) = parser.canvas.as_mut() {
            canvas.finish();
        }
    }
    result
}

struct Parser<'a, 'c> {
    seq: &'a mut Sequence,
    runtime: &'a mut Runtime,
    canvas: Option<&'a mut (dyn Canvas + 'c)>,
}

impl<'a, 'c> Parser<'a, 'c> {
    fn program(&mut self) -> Result<()> {
        self.seq.reset();
        if self.seq.is_empty() {
            return Err(error!(MissingOpenBrace).at_start());
        }
        if !self.is(Word::Open) {
            return Err(self.here(ErrorCode::MissingOpenBrace));
        }
        self.advance(ErrorCode::MissingCloseBrace)?;
        self.instruction_list()
    }

    fn instruction_list(&mut self) -> Result<()> {
        loop {
            if self.is(Word::Close) {
                return Ok(());
            }
            self.instruction()?;
            self.advance(ErrorCode::MissingCloseBrace)?;
        }
    }

    fn instruction(&mut self) -> Result<()> {
        let word = self.seq.current().and_then(Token::word);
        if let Some(token) = self.seq.current() {
            trace!(position = token.position(), word = token.text(), "instruction");
        }
        match word {
            Some(Word::Fd) => self.transform(None),
            Some(Word::Rt) => self.transform(Some(Turn::Right)),
            Some(Word::Lt) => self.transform(Some(Turn::Left)),
            Some(Word::Do) => self.r#do(),
            Some(Word::Set) => self.r#set(),
            Some(Word::Jump) => self.r#jump(),
            Some(Word::Colour) => self.r#colour(),
            _ => Err(self.here(ErrorCode::NoInstruction)),
        }
    }

    /// `FD`, `RT` and `LT`. No turn means forward.
    fn transform(&mut self, turn: Option<Turn>) -> Result<()> {
        self.advance(ErrorCode::NoVarnum)?;
        let value = match self.shape(Token::rand_varnum)? {
            Operand::Random => {
                let max = self.runtime.config().random_max;
                self.runtime.dice_mut().extent(max)
            }
            operand => self.value(operand),
        };
        match turn {
            None => self.forward(value),
            Some(turn) => self.runtime.turtle_mut().turn(value, turn),
        }
        Ok(())
    }

    fn forward(&mut self, distance: f64) {
        let (from, to) = self.runtime.turtle_mut().forward(distance);
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.draw_line(from, to);
            canvas.present();
        }
    }

    fn r#do(&mut self) -> Result<()> {
        self.advance(ErrorCode::NullDo)?;
        let index = self.shape(Token::var)?;

        self.advance(ErrorCode::ExpectedFrom)?;
        self.expect(Word::From, ErrorCode::ExpectedFrom)?;
        self.advance(ErrorCode::ExpectedDoVarnum)?;
        let from = self.varnum_value()?;
        self.runtime.turtle_mut().set_var(index, from);

        self.advance(ErrorCode::ExpectedTo)?;
        self.expect(Word::To, ErrorCode::ExpectedTo)?;
        self.advance(ErrorCode::ExpectedDoVarnum)?;
        let to = self.varnum_value()?;

        self.advance(ErrorCode::ExpectedOpenBrace)?;
        self.expect(Word::Open, ErrorCode::ExpectedOpenBrace)?;
        self.advance(ErrorCode::MissingCloseBrace)?;

        // Post-test loop: the body always runs once, then the variable is
        // compared before it is incremented.
        let body = self.seq.index();
        loop {
            self.seq.seek(body);
            self.instruction_list()?;
            let turtle = self.runtime.turtle_mut();
            let current = turtle.var(index);
            turtle.set_var(index, current + 1.0);
            trace!(var = index, value = current, to, "loop");
            if !(current < to) {
                return Ok(());
            }
        }
    }

    fn r#set(&mut self) -> Result<()> {
        self.advance(ErrorCode::NullSet)?;
        let index = self.shape(Token::var)?;
        self.advance(ErrorCode::ExpectedAssign)?;
        self.expect(Word::Assign, ErrorCode::ExpectedAssign)?;
        self.runtime.polish_mut().clear();
        self.polish()?;
        if self.evaluating() {
            let popped = self.runtime.polish_mut().pop();
            let result = popped.map_err(|_| self.here(ErrorCode::NullValue))?;
            self.runtime.turtle_mut().set_var(index, result);
            if !self.runtime.polish().is_empty() {
                return Err(self.here(ErrorCode::IncorrectPolish));
            }
        }
        Ok(())
    }

    fn polish(&mut self) -> Result<()> {
        loop {
            self.advance(ErrorCode::NullPolish)?;
            if self.is(Word::Semicolon) {
                return Ok(());
            }
            if self.seq.current().map_or(false, Token::is_operator) {
                self.op()?;
            } else {
                let value = self.varnum_value()?;
                if self.evaluating() {
                    let pushed = self.runtime.polish_mut().push(value);
                    pushed.map_err(|e| self.locate(e))?;
                }
            }
        }
    }

    fn op(&mut self) -> Result<()> {
        let operator = self.shape(Token::operator)?;
        if self.evaluating() {
            let popped = self.runtime.polish_mut().pop_2();
            let (lhs, rhs) = popped.map_err(|e| self.locate(e))?;
            let pushed = self.runtime.polish_mut().push(operator.apply(lhs, rhs));
            pushed.map_err(|e| self.locate(e))?;
        }
        Ok(())
    }

    fn r#jump(&mut self) -> Result<()> {
        let (width, height) = {
            let config = self.runtime.config();
            (config.width, config.height)
        };
        let x = self.coordinate(width)?;
        self.runtime.turtle_mut().set_x(x);
        self.advance(ErrorCode::ExpectedComma)?;
        self.expect(Word::Comma, ErrorCode::ExpectedComma)?;
        let y = self.coordinate(height)?;
        self.runtime.turtle_mut().set_y(y);
        Ok(())
    }

    /// Offsets are relative to the canvas center.
    fn coordinate(&mut self, extent: u32) -> Result<f64> {
        self.advance(ErrorCode::ExpectedJumpVarnum)?;
        Ok(match self.shape(Token::rand_varnum)? {
            Operand::Random => self.runtime.dice_mut().extent(extent),
            operand => self.value(operand) + (extent / 2) as f64,
        })
    }

    fn r#colour(&mut self) -> Result<()> {
        self.advance(ErrorCode::NullColour)?;
        let colour = match self.seq.current().and_then(Token::word) {
            Some(Word::Red) => Colour::RED,
            Some(Word::Green) => Colour::GREEN,
            Some(Word::Blue) => Colour::BLUE,
            Some(Word::Randcol) => self.random_colour(),
            _ => self.custom_colour()?,
        };
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.set_colour(colour);
        }
        Ok(())
    }

    /// Two random channels; the third is dark.
    fn random_colour(&mut self) -> Colour {
        let max = self.runtime.config().colour_max;
        let dice = self.runtime.dice_mut();
        let dark = dice.int(3);
        let a = dice.int(max) as f64;
        let b = dice.int(max) as f64;
        match dark {
            0 => Colour::from_channels(a, b, 0.0),
            1 => Colour::from_channels(a, 0.0, b),
            _ => Colour::from_channels(0.0, a, b),
        }
    }

    fn custom_colour(&mut self) -> Result<Colour> {
        let red = self.channel()?;
        self.advance(ErrorCode::ExpectedColourVarnum)?;
        let green = self.channel()?;
        self.advance(ErrorCode::ExpectedColourVarnum)?;
        let blue = self.channel()?;
        Ok(Colour::from_channels(red, green, blue))
    }

    fn channel(&mut self) -> Result<f64> {
        Ok(match self.shape(Token::rand_varnum)? {
            Operand::Random => {
                let max = self.runtime.config().colour_max;
                self.runtime.dice_mut().int(max) as f64
            }
            operand => self.value(operand),
        })
    }

    fn varnum_value(&mut self) -> Result<f64> {
        let operand = self.shape(Token::varnum)?;
        Ok(self.value(operand))
    }

    fn value(&self, operand: Operand) -> f64 {
        match operand {
            Operand::Number(n) => n,
            Operand::Var(index) => self.runtime.turtle().var(index),
            Operand::Random => 0.0,
        }
    }

    fn evaluating(&self) -> bool {
        self.canvas.is_some()
    }

    fn is(&self, word: Word) -> bool {
        self.seq.current().map_or(false, |t| t.is(word))
    }

    fn expect(&self, word: Word, code: ErrorCode) -> Result<()> {
        if self.is(word) {
            Ok(())
        } else {
            Err(self.here(code))
        }
    }

    /// Move on, or fail at the last word with `code`.
    fn advance(&mut self, code: ErrorCode) -> Result<()> {
        if self.seq.advance() {
            Ok(())
        } else {
            Err(self.here(code))
        }
    }

    /// Apply a lexical shape rule to the current word.
    fn shape<T, F>(&self, rule: F) -> Result<T>
    where
        F: FnOnce(&Token) -> std::result::Result<T, ErrorCode>,
    {
        match self.seq.current() {
            Some(token) => rule(token).map_err(|code| Error::new(code).at(token)),
            None => Err(error!(MissingCloseBrace).at_start()),
        }
    }

    fn here(&self, code: ErrorCode) -> Error {
        self.locate(Error::new(code))
    }

    fn locate(&self, error: Error) -> Error {
        match self.seq.current() {
            Some(token) => error.at(token),
            None => error.at_start(),
        }
    }
}
