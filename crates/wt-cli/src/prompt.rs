//! Line-based prompting on stdin.

use std::io::{self, BufRead, Write};

/// Writes `label` and reads one answer from `input`.
///
/// Returns `None` when no usable answer was given: end of input, an empty line,
/// a line with more than one word, or a read error. Callers fall back to a
/// default in that case. Only errors writing the label are returned.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    writer: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{label}")?;
    writer.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => {
            tracing::debug!(label, "end of input");
            Ok(None)
        }
        Ok(_) => {
            let answer = single_word(&line).map(str::to_string);
            if answer.is_none() {
                tracing::debug!(label, line = line.trim_end(), "no single-word answer");
            }
            Ok(answer)
        }
        Err(e) => {
            tracing::warn!(label, error = %e, "failed to read answer");
            Ok(None)
        }
    }
}

/// The only whitespace-separated word on the line, if there is exactly one.
fn single_word(line: &str) -> Option<&str> {
    let mut words = line.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => Some(word),
        _ => None,
    }
}
