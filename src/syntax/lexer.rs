use std::collections::HashSet;
use std::iter;
use std::result;
use std::str;

use lazy_static::lazy_static;

const OPEN_PAREN: char = '(';
const CLOSE_PAREN: char = ')';
const MINUS_CHAR: char = '-';

lazy_static! {
    /// SPECIAL_CHARS are characters indicative of a non-symbolic atom
    static ref SPECIAL_CHARS: HashSet<char> = {
        let mut set = HashSet::new();

        set.insert(OPEN_PAREN);
        set.insert(CLOSE_PAREN);

        set
    };
}

/// Result binds the std::result::Result::Err type to this module's error type.
pub type Result<T> = result::Result<T, Error>;

/// lex is a convenience function to take some `input` and produce the resulting `Vec<Token>`.
pub fn lex(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokens()
}

#[derive(Debug, PartialEq)]
/// Error represents an error the lexer encountered while lexing.
pub enum Error {
    /// UnrecognizedToken points to the byte in the input stream where an unrecognized token was found
    UnrecognizedToken(usize, char),
    // Internal represents a bug in the internal consistency of this module's logic.
    // An example is where we know a subsequent lex will succeed for some syntactic category due to checking with `peek` but still need an Option for other failable lexes.
    Internal,
}

#[derive(Debug, PartialEq)]
/// Token represents an atomic component of this language's syntax.
pub enum Token<'input> {
    Open,
    Close,
    Number(&'input str),
    Symbol(&'input str),
}

/// Lexer contains the logic to lex individual tokens from the input source.
#[derive(Debug)]
pub struct Lexer<'input> {
    input: &'input str,
    iter: iter::Peekable<str::CharIndices<'input>>,
}

impl<'input> Lexer<'input> {
    /// new constructs a Lexer instance from the input but does not do any lexing.
    pub fn new(input: &'input str) -> Self {
        Self {
            input,
            iter: input.char_indices().peekable(),
        }
    }

    /// tokens is a convenience method that returns the tokens lexed from the input stream.
    fn tokens(self) -> Result<Vec<Token<'input>>> {
        self.collect::<result::Result<Vec<_>, _>>()
    }

    /// advance_if advances the state of the lexer if the resulting tokens satisfy the `predicate`. Returns Some(span) in the `input` that was advanced over; returns None if such a span cannot be generated (e.g. because we ran out of more input chars).
    fn advance_if<P>(&mut self, predicate: P) -> Option<(usize, usize)>
    where
        P: Fn(char) -> bool,
    {
        let start = match self.peek() {
            Some(&(_, ch)) if predicate(ch) => self.consume().map(|(index, _)| index).unwrap(),
            _ => return None,
        };
        let mut end = start;

        while self.peek().map_or(false, |&(_, ch)| predicate(ch)) {
            end = self.consume().map(|(index, _)| index).unwrap()
        }

        Some((start, end))
    }

    /// consume advances the state of the lexer to the next char, yielding an Option of the current char from the input source
    fn consume(&mut self) -> Option<(usize, char)> {
        self.iter.next()
    }

    /// peek returns the next element in the iterator without consuming it
    fn peek(&mut self) -> Option<&(usize, char)> {
        self.iter.peek()
    }

    /// take_while advances the input while `predicate` is true and then returns a str slice of the traversed span.
    fn take_while<P>(&mut self, predicate: P) -> Option<&'input str>
    where
        P: Fn(char) -> bool,
    {
        self.advance_if(predicate)
            .map(|(start, finish)| &self.input[start..=finish])
    }

    fn consume_paren(&mut self, token: Token<'input>) -> Result<Token<'input>> {
        self.consume();
        Ok(token)
    }

    fn is_numeric(ch: char) -> bool {
        ch.is_ascii_digit()
    }

    // digit_follows checks whether the char after `index` is a digit, so that
    // a leading minus sign can begin a number literal as in `-5`.
    fn digit_follows(&self, index: usize) -> bool {
        self.input[index + MINUS_CHAR.len_utf8()..]
            .chars()
            .next()
            .map_or(false, Lexer::is_numeric)
    }

    // consume_numeric lexes an optional leading minus sign followed by a run of digits.
    // The caller has already peeked to confirm the first char begins a number.
    fn consume_numeric(&mut self) -> Result<Token<'input>> {
        let start = match self.consume() {
            Some((index, _)) => index,
            None => return Err(Error::Internal),
        };
        let mut end = start;

        while self.peek().map_or(false, |&(_, ch)| Lexer::is_numeric(ch)) {
            end = match self.consume() {
                Some((index, _)) => index,
                None => return Err(Error::Internal),
            };
        }

        Ok(Token::Number(&self.input[start..=end]))
    }

    fn is_symbolic(ch: char) -> bool {
        (ch.is_alphanumeric() || ch.is_ascii_punctuation())
            && !SPECIAL_CHARS.contains(&ch)
            && !Lexer::is_whitespace(ch)
    }

    fn consume_symbol(&mut self) -> Result<Token<'input>> {
        self.take_while(Lexer::is_symbolic)
            .map(Token::Symbol)
            .ok_or(Error::Internal)
    }

    fn is_whitespace(ch: char) -> bool {
        ch.is_whitespace()
    }
}

impl<'a> iter::Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance_if(Lexer::is_whitespace);

        // copy the peeked pair out so the guards below can look at the input
        let next_token = match self.peek().copied() {
            None => return None,
            // The order is important here
            Some((_, OPEN_PAREN)) => self.consume_paren(Token::Open),
            Some((_, CLOSE_PAREN)) => self.consume_paren(Token::Close),
            Some((index, MINUS_CHAR)) if self.digit_follows(index) => self.consume_numeric(),
            Some((_, ch)) if Lexer::is_numeric(ch) => self.consume_numeric(),
            Some((_, ch)) if Lexer::is_symbolic(ch) => self.consume_symbol(),
            Some((index, ch)) => Err(Error::UnrecognizedToken(index, ch)),
        };
        Some(next_token)
    }
}
