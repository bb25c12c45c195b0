use super::{ErrorCode, Position};
use std::convert::TryFrom;

const DIGITS: &str = "0123456789";
const NUMCHARS: &str = "-.0123456789";
const OPCHARS: &str = "+-*/";

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    text: String,
    position: Position,
}

impl Token {
    pub fn new(text: &str, position: Position) -> Token {
        Token {
            text: text.to_string(),
            position,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based ordinal of the token in the whole program.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn word(&self) -> Option<Word> {
        Word::from_str(&self.text)
    }

    pub fn is(&self, word: Word) -> bool {
        self.word() == Some(word)
    }

    /// A token made only of operator characters is treated as an OP even
    /// when it is too long to be a valid one.
    pub fn is_operator(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| OPCHARS.contains(c))
    }

    pub fn operator(&self) -> Result<Operator, ErrorCode> {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Operator::try_from(ch),
            _ => Err(ErrorCode::OpTooLong),
        }
    }

    pub fn var(&self) -> Result<usize, ErrorCode> {
        let bytes = self.text.as_bytes();
        if bytes.len() > 1 {
            return Err(ErrorCode::VarTooLong);
        }
        match bytes.first() {
            Some(ch) if ch.is_ascii_uppercase() => Ok((ch - b'A') as usize),
            _ => Err(ErrorCode::VarUnexpected),
        }
    }

    pub fn varnum(&self) -> Result<Operand, ErrorCode> {
        let s = self.text.as_str();
        if !s.is_empty() && s.chars().all(|c| DIGITS.contains(c)) {
            return Ok(Operand::Number(atof(s)));
        }
        if !s.is_empty() && s.chars().all(|c| NUMCHARS.contains(c)) {
            let minus = s.matches('-').count();
            if minus > 1 || (minus == 1 && !s.starts_with('-')) {
                return Err(ErrorCode::InvalidVarnum);
            }
            if s.matches('.').count() > 1 {
                return Err(ErrorCode::InvalidVarnum);
            }
            return Ok(Operand::Number(atof(s)));
        }
        self.var().map(Operand::Var)
    }

    pub fn rand_varnum(&self) -> Result<Operand, ErrorCode> {
        if self.is(Word::Random) {
            Ok(Operand::Random)
        } else {
            self.varnum()
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

// Lone "-" or "." read as zero, the same as C's atof.
fn atof(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operand {
    Number(f64),
    Var(usize),
    Random,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Open,
    Close,
    Fd,
    Rt,
    Lt,
    Do,
    From,
    To,
    Set,
    Assign,
    Semicolon,
    Jump,
    Comma,
    Colour,
    Red,
    Green,
    Blue,
    Randcol,
    Random,
}

impl Word {
    pub fn from_str(s: &str) -> Option<Word> {
        use Word::*;
        Some(match s {
            "{" => Open,
            "}" => Close,
            "FD" => Fd,
            "RT" => Rt,
            "LT" => Lt,
            "DO" => Do,
            "FROM" => From,
            "TO" => To,
            "SET" => Set,
            ":=" => Assign,
            ";" => Semicolon,
            "JUMP" => Jump,
            "," => Comma,
            "COLOUR" => Colour,
            "RED" => Red,
            "GREEN" => Green,
            "BLUE" => Blue,
            "RANDCOL" => Randcol,
            "RANDOM" => Random,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Open => write!(f, "{{"),
            Close => write!(f, "}}"),
            Fd => write!(f, "FD"),
            Rt => write!(f, "RT"),
            Lt => write!(f, "LT"),
            Do => write!(f, "DO"),
            From => write!(f, "FROM"),
            To => write!(f, "TO"),
            Set => write!(f, "SET"),
            Assign => write!(f, ":="),
            Semicolon => write!(f, ";"),
            Jump => write!(f, "JUMP"),
            Comma => write!(f, ","),
            Colour => write!(f, "COLOUR"),
            Red => write!(f, "RED"),
            Green => write!(f, "GREEN"),
            Blue => write!(f, "BLUE"),
            Randcol => write!(f, "RANDCOL"),
            Random => write!(f, "RANDOM"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        use Operator::*;
        match self {
            Plus => lhs + rhs,
            Minus => lhs - rhs,
            Multiply => lhs * rhs,
            Divide => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = ErrorCode;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Ok(match ch {
            '+' => Operator::Plus,
            '-' => Operator::Minus,
            '*' => Operator::Multiply,
            '/' => Operator::Divide,
            _ => return Err(ErrorCode::OpTooLong),
        })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn varnum(s: &str) -> Result<Operand, ErrorCode> {
        Token::new(s, 1).varnum()
    }

    #[test]
    fn test_from_string() {
        assert_eq!(Word::from_str("COLOUR"), Some(Word::Colour));
        assert_eq!(Word::from_str("colour"), None);
        assert_eq!(Word::from_str("PICKLES"), None);
    }

    #[test]
    fn test_varnum_table() {
        assert_eq!(varnum("30"), Ok(Operand::Number(30.0)));
        assert_eq!(varnum("-30"), Ok(Operand::Number(-30.0)));
        assert_eq!(varnum("3-0"), Err(ErrorCode::InvalidVarnum));
        assert_eq!(varnum("3.0"), Ok(Operand::Number(3.0)));
        assert_eq!(varnum("3..0"), Err(ErrorCode::InvalidVarnum));
        assert_eq!(varnum("--3"), Err(ErrorCode::InvalidVarnum));
        assert_eq!(varnum("A"), Ok(Operand::Var(0)));
        assert_eq!(varnum("Z"), Ok(Operand::Var(25)));
        assert_eq!(varnum("AB"), Err(ErrorCode::VarTooLong));
        assert_eq!(varnum("3a0"), Err(ErrorCode::VarTooLong));
        assert_eq!(varnum("a"), Err(ErrorCode::VarUnexpected));
        assert_eq!(varnum("}"), Err(ErrorCode::VarUnexpected));
    }

    #[test]
    fn test_varnum_atof_edges() {
        assert_eq!(varnum("-"), Ok(Operand::Number(0.0)));
        assert_eq!(varnum("."), Ok(Operand::Number(0.0)));
        assert_eq!(varnum("-.5"), Ok(Operand::Number(-0.5)));
        assert_eq!(varnum("5."), Ok(Operand::Number(5.0)));
    }

    #[test]
    fn test_rand_varnum() {
        assert_eq!(Token::new("RANDOM", 1).rand_varnum(), Ok(Operand::Random));
        assert_eq!(
            Token::new("RANDOM", 1).varnum(),
            Err(ErrorCode::VarTooLong)
        );
    }

    #[test]
    fn test_operator() {
        assert!(Token::new("+", 1).is_operator());
        assert!(Token::new("++", 1).is_operator());
        assert!(!Token::new("-5", 1).is_operator());
        assert!(!Token::new("&", 1).is_operator());
        assert_eq!(Token::new("/", 1).operator(), Ok(Operator::Divide));
        assert_eq!(Token::new("+-", 1).operator(), Err(ErrorCode::OpTooLong));
        assert_eq!(Operator::Minus.apply(1.0, 3.0), -2.0);
    }
}
