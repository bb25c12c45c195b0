use super::token::Token;

/// Split source text into words numbered from 1.
///
/// Words are separated by space, tab, newline, carriage return and form
/// feed. Nothing else is special; `{a` is one word.
pub fn lex(s: &str) -> Vec<Token> {
    s.split(is_turtle_whitespace)
        .filter(|w| !w.is_empty())
        .enumerate()
        .map(|(index, w)| Token::new(w, index + 1))
        .collect()
}

fn is_turtle_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r' || c == '\x0c'
}
