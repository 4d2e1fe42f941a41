use super::types::Operator;
use crate::error::{CalcError, CalcResult};

/// Entries of the working stack of the shunting-yard reduction.
enum StackItem {
    OpenParen,
    Op(Operator),
}

/// Reorders infix tokens into postfix order.
///
/// `*` and `/` bind tighter than `+` and `-`, and all four are left-associative: an
/// incoming operator first emits every stacked operator of equal or higher precedence.
/// Parentheses only steer the reduction and never reach the output.
///
/// Unbalanced parentheses are rejected with `MalformedExpression`, both for a `)` without
/// a matching `(` and for a `(` still open at the end of input. Any token that is neither
/// an operator nor a parenthesis is passed through as an operand; the evaluator decides
/// whether it is a valid number.
pub fn to_postfix(tokens: &[String]) -> CalcResult<Vec<String>> {
    let mut stack: Vec<StackItem> = Vec::with_capacity(tokens.len());
    let mut output: Vec<String> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.as_str() {
            "(" => stack.push(StackItem::OpenParen),
            ")" => loop {
                match stack.pop() {
                    Some(StackItem::Op(op)) => output.push(op.symbol().to_string()),
                    Some(StackItem::OpenParen) => break,
                    None => return Err(CalcError::MalformedExpression),
                }
            },
            other => match Operator::from_token(other) {
                Some(incoming) => {
                    while let Some(StackItem::Op(top)) = stack.last() {
                        if top.precedence() < incoming.precedence() {
                            break;
                        }
                        output.push(top.symbol().to_string());
                        stack.pop();
                    }
                    stack.push(StackItem::Op(incoming));
                }
                None => output.push(other.to_string()),
            },
        }
    }

    while let Some(item) = stack.pop() {
        match item {
            StackItem::Op(op) => output.push(op.symbol().to_string()),
            StackItem::OpenParen => return Err(CalcError::MalformedExpression),
        }
    }

    Ok(output)
}
