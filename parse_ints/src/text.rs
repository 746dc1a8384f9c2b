use log::trace;

use crate::{ParseError, TokenError};

/// Parse every whitespace-separated token in `text` as an `i64`, in order.
///
/// Stops at the first token that doesn't parse. The returned error owns the
/// integers parsed up to that point.
pub fn parse_ints(text: &str) -> Result<Vec<i64>, ParseError> {
    let mut parsed = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        extend_from_line(&mut parsed, line.as_bytes(), idx + 1)?;
    }
    Ok(parsed)
}

/// Appends the integers on a single line of raw bytes to `parsed`.
///
/// On failure `parsed` is moved into the error and left empty.
pub(crate) fn extend_from_line(
    parsed: &mut Vec<i64>,
    line: &[u8],
    line_no: usize,
) -> Result<(), ParseError> {
    let tokens = line
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty());
    for token in tokens {
        match parse_token(token) {
            Ok(num) => parsed.push(num),
            Err(source) => {
                let token = String::from_utf8_lossy(token).into_owned();
                trace!("bad token {token:?} on line {line_no}");
                return Err(ParseError::new(
                    line_no,
                    token,
                    std::mem::take(parsed),
                    source,
                ));
            }
        }
    }
    Ok(())
}

fn parse_token(token: &[u8]) -> Result<i64, TokenError> {
    Ok(std::str::from_utf8(token)?.parse::<i64>()?)
}
