use super::op::{builtin_op, Op};
use crate::value::Value;

/// eval reduces a value to its final form. Numbers, errors, and symbols
/// evaluate to themselves; s-expressions reduce recursively. Semantically
/// wrong input reduces to an error value, never a panic.
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(children) => eval_sexpr(children),
        value => value,
    }
}

fn eval_sexpr(children: Vec<Value>) -> Value {
    let mut children = children.into_iter().map(eval).collect::<Vec<_>>();

    // the first error among the reduced children wins; the rest are dropped
    if let Some(index) = children.iter().position(|child| child.is_error()) {
        return children.swap_remove(index);
    }

    if children.is_empty() {
        return Value::Sexpr(children);
    }

    if children.len() == 1 {
        return children.remove(0);
    }

    match children.remove(0) {
        Value::Symbol(name) => match name.parse::<Op>() {
            Ok(op) => builtin_op(op, children),
            Err(()) => Value::error("Invalid Operator!"),
        },
        _ => Value::error("S-expression does not start with symbol!"),
    }
}

#[cfg(test)]
mod tests {
    use super::Value::*;
    use super::*;

    fn sexpr(children: Vec<Value>) -> Value {
        Value::Sexpr(children)
    }

    macro_rules! eval_tests {
        ($($name:ident: $value:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let (input, expected): (Value, Value) = $value;
                    assert_eq!(expected, eval(input));
                }
            )*
        }
    }

    eval_tests! {
        can_eval_number_to_itself: (Number(33), Number(33)),
        can_eval_symbol_to_itself: (Value::symbol("+"), Value::symbol("+")),
        can_eval_error_to_itself: (
            Value::error("Division by zero!"),
            Value::error("Division by zero!")
        ),
        can_eval_empty_sexpr_to_itself: (Value::empty_sexpr(), Value::empty_sexpr()),
        can_collapse_single_child: (sexpr(vec![Number(5)]), Number(5)),
        can_eval_simple_arith: (sexpr(vec![
            Value::symbol("+"),
            Number(1),
            Number(2),
            Number(3),
        ]), Number(6)),
        can_eval_multiplication: (sexpr(vec![
            Value::symbol("*"),
            Number(2),
            Number(3),
            Number(4),
        ]), Number(24)),
        can_eval_unary_minus: (sexpr(vec![
            Value::symbol("-"),
            Number(7),
        ]), Number(-7)),
        can_eval_division: (sexpr(vec![
            Value::symbol("/"),
            Number(10),
            Number(2),
        ]), Number(5)),
        can_eval_nested_exprs: (sexpr(vec![
            Value::symbol("+"),
            Number(1),
            sexpr(vec![
                Value::symbol("*"),
                Number(2),
                Number(3),
            ]),
        ]), Number(7)),
        can_eval_division_by_zero: (sexpr(vec![
            Value::symbol("/"),
            Number(1),
            Number(0),
        ]), Value::error("Division by zero!")),
        can_eval_modulo_by_zero: (sexpr(vec![
            Value::symbol("%"),
            Number(1),
            Number(0),
        ]), Value::error("Modulo by zero!")),
        error_short_circuits_enclosing_expr: (sexpr(vec![
            Value::symbol("+"),
            Number(1),
            sexpr(vec![
                Value::symbol("/"),
                Number(1),
                Number(0),
            ]),
            sexpr(vec![
                Value::symbol("*"),
                Number(9),
                Number(9),
            ]),
        ]), Value::error("Division by zero!")),
        first_error_wins: (sexpr(vec![
            sexpr(vec![
                Value::symbol("/"),
                Number(1),
                Number(0),
            ]),
            sexpr(vec![
                Value::symbol("%"),
                Number(1),
                Number(0),
            ]),
        ]), Value::error("Division by zero!")),
        rejects_symbol_operand: (sexpr(vec![
            Value::symbol("+"),
            Number(1),
            Value::symbol("+"),
        ]), Value::error("Cannot operate on non-number")),
        rejects_non_symbol_head: (sexpr(vec![
            Number(1),
            Number(2),
            Number(3),
        ]), Value::error("S-expression does not start with symbol!")),
        rejects_unknown_operator: (sexpr(vec![
            Value::symbol("foo"),
            Number(1),
            Number(2),
        ]), Value::error("Invalid Operator!")),
        can_eval_exponentiation: (sexpr(vec![
            Value::symbol("^"),
            Number(2),
            Number(10),
        ]), Number(1024)),
        rejects_negative_exponent: (sexpr(vec![
            Value::symbol("^"),
            Number(2),
            Number(-1),
        ]), Value::error("Negative exponent!")),
    }

    #[test]
    fn single_child_collapse_happens_after_reduction() {
        let input = sexpr(vec![sexpr(vec![
            Value::symbol("+"),
            Number(2),
            Number(2),
        ])]);

        assert_eq!(Number(4), eval(input));
    }
}
