use super::operations::Operations;
use super::postfix::to_postfix;
use super::tokenizer::tokenize;
use super::types::Operator;
use crate::error::{CalcError, CalcResult};

/// Parses an operand token. Only `.` is a decimal separator, so a token such as `1,5`
/// is an invalid number, as is a literal too large for a finite `f64`.
fn parse_value(token: &str) -> CalcResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidNumber(token.to_string())),
    }
}

/// Runs the stack machine over a postfix sequence.
///
/// Operands are pushed; an operator pops `b` then `a` and pushes `ops(a, b)`. A zero
/// divisor is rejected here, before the division slot is ever invoked, so the check holds
/// for local and remote operation tables alike. An operation whose result would leave the
/// finite `f64` range is rejected before the slot is invoked, and a non-finite value
/// coming back from a slot fails the evaluation. Exactly one value must remain at the end.
pub async fn evaluate(postfix: &[String], ops: &Operations) -> CalcResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        let Some(op) = Operator::from_token(token) else {
            stack.push(parse_value(token)?);
            continue;
        };

        let b = stack.pop().ok_or(CalcError::MalformedExpression)?;
        let a = stack.pop().ok_or(CalcError::MalformedExpression)?;

        if op == Operator::Divide && b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }

        if !op.apply(a, b).is_finite() {
            return Err(CalcError::OutOfRange);
        }

        let value = ops.apply(op, a, b).await?;
        if !value.is_finite() {
            return Err(CalcError::OutOfRange);
        }
        stack.push(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(CalcError::MalformedExpression),
    }
}

/// Tokenizes, converts and evaluates `expression` with the given operation table.
pub async fn calc(expression: &str, ops: &Operations) -> CalcResult<f64> {
    let postfix = to_postfix(&tokenize(expression))?;
    evaluate(&postfix, ops).await
}
