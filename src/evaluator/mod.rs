mod evaluator;
mod op;

use crate::reader;
use crate::syntax;
use crate::value::Value;

pub use self::evaluator::eval;
pub use self::op::{builtin_op, Op};

/// eval_line runs one line of source text through the whole pipeline:
/// parse to a syntax tree, read to a value tree, reduce to a single value.
pub fn eval_line(input: &str) -> syntax::Result<Value> {
    let tree = syntax::parse(input)?;

    Ok(eval(reader::read(&tree)))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! eval_line_tests {
        ($($name:ident: $value:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let (input, expected): (&str, &str) = $value;
                    let result = eval_line(input).unwrap();
                    assert_eq!(expected, result.to_string());
                }
            )*
        }
    }

    eval_line_tests! {
        can_eval_bare_form: ("+ 1 2", "3"),
        can_eval_parenthesized_form: ("(+ 1 2 3)", "6"),
        can_eval_nested_form: ("(+ 1 (* 2 3) (- 10 5))", "12"),
        can_eval_negative_literal: ("(- -5 3)", "-8"),
        can_eval_single_element_list: ("(5)", "5"),
        can_eval_empty_list: ("()", "()"),
        can_eval_division_by_zero: ("(/ 1 0)", "Error: Division by zero!"),
        can_eval_modulo_by_zero: ("(% 1 0)", "Error: Modulo by zero!"),
        error_short_circuits: ("(+ 1 (/ 1 0) (* 9 9))", "Error: Division by zero!"),
        can_report_bad_literal: ("(+ 1 99999999999999999999)", "Error: invalid number"),
        can_report_bad_head: ("(1 2 3)", "Error: S-expression does not start with symbol!"),
        can_report_unknown_operator: ("(foo 1 2)", "Error: Invalid Operator!"),
    }

    #[test]
    fn surfaces_parse_errors() {
        let result = eval_line("(+ 1 2");
        assert_eq!(Err(syntax::Error::UnbalancedParen(0)), result);
    }
}
