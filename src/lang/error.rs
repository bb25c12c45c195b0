use super::{Position, Token};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    word: Option<(Position, String)>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $token:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at($token)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error { code, word: None }
    }

    /// Attach the failing token. The first position wins; later calls
    /// on an error that already has one are ignored.
    pub fn at(self, token: &Token) -> Error {
        if self.word.is_some() {
            return self;
        }
        Error {
            code: self.code,
            word: Some((token.position(), token.text().to_string())),
        }
    }

    /// Position used when the program has no words at all.
    pub fn at_start(self) -> Error {
        if self.word.is_some() {
            return self;
        }
        Error {
            code: self.code,
            word: Some((0, String::new())),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn position(&self) -> Option<Position> {
        self.word.as_ref().map(|(position, _)| *position)
    }

    pub fn text(&self) -> Option<&str> {
        self.word.as_ref().map(|(_, text)| text.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    MissingOpenBrace,
    MissingCloseBrace,
    NoInstruction,
    NoVarnum,
    NullDo,
    ExpectedOpenBrace,
    ExpectedFrom,
    ExpectedDoVarnum,
    ExpectedTo,
    NullSet,
    ExpectedAssign,
    NullValue,
    IncorrectPolish,
    NullPolish,
    OpTooLong,
    NonExistentNumber,
    StackOverflow,
    ExpectedJumpVarnum,
    ExpectedComma,
    NullColour,
    ExpectedColourVarnum,
    InvalidVarnum,
    VarTooLong,
    VarUnexpected,
}

impl ErrorCode {
    pub fn message(&self) -> &'static str {
        use ErrorCode::*;
        match self {
            MissingOpenBrace => "Program did not start with {.",
            MissingCloseBrace => "Program did not end with }.",
            NoInstruction => "No proper instruction found.",
            NoVarnum => "No VARNUM found.",
            NullDo => "Null DO instruction.",
            ExpectedOpenBrace => "Expected { in DO instruction.",
            ExpectedFrom => "Expected FROM in DO instruction.",
            ExpectedDoVarnum => "Expected VARNUM in DO instruction.",
            ExpectedTo => "Expected TO in DO instruction.",
            NullSet => "Null SET instruction.",
            ExpectedAssign => "Expected := in SET instruction.",
            NullValue => "Attempted to use SET with null value.",
            IncorrectPolish => "Incorrect POLISH notation.",
            NullPolish => "Null POLISH instruction.",
            OpTooLong => "OP is more than one character.",
            NonExistentNumber => "OP operated on a non-existent number.",
            StackOverflow => "POLISH expression is too long.",
            ExpectedJumpVarnum => "Expected VARNUM in JUMP instruction.",
            ExpectedComma => "Expected , in JUMP instruction.",
            NullColour => "Null COLOUR instruction.",
            ExpectedColourVarnum => "Expected VARNUM in COLOUR instruction.",
            InvalidVarnum => "VARNUM contains invalid characters.",
            VarTooLong => "VAR is too many characters.",
            VarUnexpected => "VAR is an unexpected character.",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.word {
            Some((position, text)) => write!(
                f,
                "Error: {} Issue encountered at word {}: {}.",
                self.code.message(),
                position,
                text
            ),
            None => write!(f, "Error: {}", self.code.message()),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_word() {
        let token = Token::new("test", 1);
        let e = error!(MissingOpenBrace, &token);
        assert_eq!(
            e.to_string(),
            "Error: Program did not start with {. Issue encountered at word 1: test."
        );
    }

    #[test]
    fn test_first_position_wins() {
        let first = Token::new("++", 4);
        let second = Token::new(";", 5);
        let e = error!(OpTooLong, &first).at(&second);
        assert_eq!(e.position(), Some(4));
        assert_eq!(e.text(), Some("++"));
    }

    #[test]
    fn test_display_without_word() {
        let e = error!(NonExistentNumber);
        assert_eq!(e.position(), None);
        assert_eq!(e.to_string(), "Error: OP operated on a non-existent number.");
    }
}
