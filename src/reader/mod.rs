use crate::syntax::{SyntaxNode, Tag};
use crate::value::Value;

/// read converts a syntax tree into the value tree it denotes. It is total:
/// the only failure it can produce is a numeric literal that does not fit in
/// an `i64`, which becomes an error value rather than a failed read.
pub fn read(node: &SyntaxNode) -> Value {
    match node.tag {
        Tag::Number => read_number(node.text),
        Tag::Symbol => Value::symbol(node.text),
        Tag::Root | Tag::Sexpr => {
            let children = node
                .children
                .iter()
                .filter(|child| !child.is_punct())
                .map(read)
                .collect();
            Value::Sexpr(children)
        }
        // a lone delimiter carries no meaning of its own
        Tag::Punct => Value::empty_sexpr(),
    }
}

fn read_number(text: &str) -> Value {
    match text.parse() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::error("invalid number"),
    }
}
