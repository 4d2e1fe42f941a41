/// Returns true for characters that belong to a numeric run.
/// A `,` joins the run like `.`; value parsing later rejects it.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

/// Splits a raw expression into tokens.
///
/// Consecutive digits and decimal separators are coalesced into one token, every other
/// non-whitespace character becomes a token of its own, whitespace only ends the current
/// numeric run. Numbers are not validated here.
///
/// `"2+2*(3+3*(1+2))"` -> `["2", "+", "2", "*", "(", "3", "+", "3", "*", "(", "1", "+", "2", ")", ")"]`
pub fn tokenize(expression: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut number = String::new();

    for c in expression.chars() {
        if is_number_char(c) {
            number.push(c);
            continue;
        }

        if !number.is_empty() {
            tokens.push(std::mem::take(&mut number));
        }

        if !c.is_whitespace() {
            tokens.push(c.to_string());
        }
    }

    if !number.is_empty() {
        tokens.push(number);
    }

    tokens
}
