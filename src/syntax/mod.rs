mod lexer;
mod parser;

use self::lexer::Lexer;
use self::parser::Parser;

pub use self::parser::{Error, Result, SyntaxNode, Tag};

pub use self::lexer::lex;

pub fn parse(input: &str) -> Result<SyntaxNode> {
    let mut lexer = Lexer::new(input);

    let mut parser = Parser::new();
    parser.parse_tokens(&mut lexer)
}
