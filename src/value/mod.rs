use std::fmt;

use itertools::Itertools;

/// Value is the runtime datum produced by reading or evaluating a form.
///
/// An `Sexpr` exclusively owns its children; dropping it releases the whole
/// subtree. An `Error` is terminal: it carries no children and is never
/// evaluated further.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    Sexpr(Vec<Value>),
}

impl Value {
    pub fn number(number: i64) -> Self {
        Value::Number(number)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn empty_sexpr() -> Self {
        Value::Sexpr(vec![])
    }

    pub fn is_error(&self) -> bool {
        match self {
            Value::Error(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Value::*;

        match self {
            Number(n) => write!(f, "{}", n),
            Error(message) => write!(f, "Error: {}", message),
            Symbol(s) => write!(f, "{}", s),
            Sexpr(children) => {
                write!(f, "(")?;
                write!(f, "{}", children.iter().format(" "))?;
                write!(f, ")")
            }
        }
    }
}
