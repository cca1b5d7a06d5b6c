use std::io;

use crate::syntax;
use crate::value::Value;

pub fn print_value_to(mut out: impl io::Write, value: &Value) -> io::Result<()> {
    write!(&mut out, "{}", value)
}

pub fn println_to(mut out: impl io::Write, result: &syntax::Result<Value>) -> io::Result<()> {
    match result {
        Ok(value) => writeln!(&mut out, "{}", value),
        Err(error) => writeln!(&mut out, "{}", error),
    }
}
