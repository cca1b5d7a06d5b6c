use std::str;

use crate::value::Value;

/// Op is the closed set of built-in operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl str::FromStr for Op {
    type Err = ();

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "+" => Ok(Op::Add),
            "-" => Ok(Op::Sub),
            "*" => Ok(Op::Mul),
            "/" => Ok(Op::Div),
            "%" => Ok(Op::Rem),
            "^" => Ok(Op::Pow),
            _ => Err(()),
        }
    }
}

impl Op {
    // apply performs one step of the left fold. Addition, subtraction, and
    // multiplication wrap on overflow; division and remainder truncate toward
    // zero, with the wrapping forms keeping `i64::MIN / -1` total as well.
    fn apply(self, acc: i64, operand: i64) -> Result<i64, Value> {
        match self {
            Op::Add => Ok(acc.wrapping_add(operand)),
            Op::Sub => Ok(acc.wrapping_sub(operand)),
            Op::Mul => Ok(acc.wrapping_mul(operand)),
            Op::Div => {
                if operand == 0 {
                    Err(Value::error("Division by zero!"))
                } else {
                    Ok(acc.wrapping_div(operand))
                }
            }
            Op::Rem => {
                if operand == 0 {
                    Err(Value::error("Modulo by zero!"))
                } else {
                    Ok(acc.wrapping_rem(operand))
                }
            }
            Op::Pow => {
                if operand < 0 {
                    Err(Value::error("Negative exponent!"))
                } else {
                    Ok(pow_wrapping(acc, operand as u64))
                }
            }
        }
    }
}

// exponentiation by squaring with wrapping multiplication
fn pow_wrapping(mut base: i64, mut exponent: u64) -> i64 {
    let mut result: i64 = 1;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }

    result
}

/// builtin_op reduces already-evaluated operands with `op`, folding left to
/// right from the first operand. Every operand must be a number, otherwise
/// the whole operand list is rejected. A lone operand under `-` is negated.
pub fn builtin_op(op: Op, operands: Vec<Value>) -> Value {
    let mut numbers = Vec::with_capacity(operands.len());
    for operand in operands {
        match operand {
            Value::Number(number) => numbers.push(number),
            _ => return Value::error("Cannot operate on non-number"),
        }
    }

    if op == Op::Sub && numbers.len() == 1 {
        return Value::Number(numbers[0].wrapping_neg());
    }

    let mut numbers = numbers.into_iter();
    let mut result = match numbers.next() {
        Some(first) => first,
        // the evaluator collapses single-element expressions before
        // dispatching, so an operator always has at least one operand
        None => return Value::empty_sexpr(),
    };

    for operand in numbers {
        result = match op.apply(result, operand) {
            Ok(next) => next,
            Err(error) => return error,
        };
    }

    Value::Number(result)
}
