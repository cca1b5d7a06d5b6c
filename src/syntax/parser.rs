use std::convert;
use std::fmt;
use std::result;

use super::lexer::{Error as LexerError, Result as LexerResult, Token};

pub type Result<T> = result::Result<T, Error>;

const INITIAL_NESTING_DEPTH: usize = 10;

/// Tag categorizes a node of the syntax tree.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Tag {
    Root,
    Sexpr,
    Number,
    Symbol,
    /// Punct marks a literal delimiter retained in the tree, e.g. `(` or `)`.
    Punct,
}

/// SyntaxNode is one already-parsed unit of source text: a category tag, the
/// literal text for leaf nodes, and the ordered children for interior nodes.
/// An interior node keeps its delimiters as `Punct` children; consumers that
/// only care about the meaningful forms are expected to skip those.
#[derive(Debug, PartialEq)]
pub struct SyntaxNode<'input> {
    pub tag: Tag,
    pub text: &'input str,
    pub children: Vec<SyntaxNode<'input>>,
}

impl<'input> SyntaxNode<'input> {
    pub fn root(forms: Vec<SyntaxNode<'input>>) -> Self {
        Self {
            tag: Tag::Root,
            text: "",
            children: forms,
        }
    }

    pub fn sexpr(forms: Vec<SyntaxNode<'input>>) -> Self {
        let mut children = Vec::with_capacity(forms.len() + 2);
        children.push(SyntaxNode::punct("("));
        children.extend(forms);
        children.push(SyntaxNode::punct(")"));
        Self {
            tag: Tag::Sexpr,
            text: "",
            children,
        }
    }

    pub fn number(text: &'input str) -> Self {
        Self {
            tag: Tag::Number,
            text,
            children: vec![],
        }
    }

    pub fn symbol(text: &'input str) -> Self {
        Self {
            tag: Tag::Symbol,
            text,
            children: vec![],
        }
    }

    fn punct(text: &'static str) -> Self {
        Self {
            tag: Tag::Punct,
            text,
            children: vec![],
        }
    }

    pub fn is_punct(&self) -> bool {
        self.tag == Tag::Punct
    }
}

#[derive(Debug, PartialEq)]
pub enum Error {
    /// UnbalancedParen indicates a parenthesis without a matching partner. Returns an index into the token stream where the imbalance occurs.
    UnbalancedParen(usize),
    UnrecognizedToken(usize, char),
}

impl convert::From<LexerError> for Error {
    fn from(lexer_error: LexerError) -> Self {
        match lexer_error {
            LexerError::UnrecognizedToken(index, ch) => Error::UnrecognizedToken(index, ch),
            LexerError::Internal => unreachable!(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnbalancedParen(index) => {
                write!(f, "Parse error: unbalanced parenthesis at token {}", index)
            }
            Error::UnrecognizedToken(index, ch) => {
                write!(f, "Parse error: unrecognized token {:?} at byte {}", ch, index)
            }
        }
    }
}

#[derive(Debug)]
struct NestingCounter {
    count: isize,
    indices: Vec<usize>,
}

pub struct Parser {
    nesting: NestingCounter,
    token_index: Option<usize>,
}

impl<'a> Parser {
    pub fn new() -> Self {
        Self {
            nesting: NestingCounter {
                count: 0,
                indices: Vec::with_capacity(INITIAL_NESTING_DEPTH),
            },
            token_index: None,
        }
    }

    /// parse_tokens takes an `Iterator` over `LexerResult<Token>` and attempts to parse a full syntax tree from them.
    // NOTE: we require a `&mut T` so that we can recurse over the token stream. The borrowing could be simplified with
    // `&mut tokens` but then the compiler hits a recursion limit while attempting to monomorphize the function.
    pub fn parse_tokens<T>(&mut self, tokens: &mut T) -> Result<SyntaxNode<'a>>
    where
        T: Iterator<Item = LexerResult<Token<'a>>>,
    {
        let forms = self.parse_form(tokens)?;

        if self.nesting.count < 0 {
            Err(Error::UnbalancedParen(self.token_index.unwrap()))
        } else {
            Ok(SyntaxNode::root(forms))
        }
    }

    fn parse_form<T>(&mut self, tokens: &mut T) -> Result<Vec<SyntaxNode<'a>>>
    where
        T: Iterator<Item = LexerResult<Token<'a>>>,
    {
        let mut nodes = vec![];

        while let Some(result) = tokens.next() {
            self.increment_token_index();

            let token = result?;
            let node = match token {
                Token::Open => self.parse_sexpr(tokens.by_ref())?,
                Token::Close => {
                    self.dec_depth();
                    break;
                }
                Token::Number(text) => SyntaxNode::number(text),
                Token::Symbol(text) => SyntaxNode::symbol(text),
            };

            nodes.push(node)
        }

        Ok(nodes)
    }

    fn increment_token_index(&mut self) {
        if let Some(index) = self.token_index.as_mut() {
            *index += 1;
        } else {
            self.token_index = Some(0);
        }
    }

    fn inc_depth(&mut self) -> isize {
        let index = self.token_index.unwrap();
        self.nesting.count += 1;
        self.nesting.indices.push(index);
        self.nesting.count
    }

    fn dec_depth(&mut self) {
        self.nesting.count -= 1;
    }

    fn get_exit_depth(&self) -> isize {
        // add one to account for decrement that *should* have occurred
        self.nesting.count + 1
    }

    fn parse_sexpr<T>(&mut self, tokens: &mut T) -> Result<SyntaxNode<'a>>
    where
        T: Iterator<Item = LexerResult<Token<'a>>>,
    {
        let entry_depth = self.inc_depth();
        let forms = self.parse_form(tokens)?;
        let exit_depth = self.get_exit_depth();

        if entry_depth < exit_depth {
            return Err(Error::UnbalancedParen(
                *self.nesting.indices.last().unwrap(),
            ));
        }

        self.nesting.indices.pop();
        Ok(SyntaxNode::sexpr(forms))
    }
}
