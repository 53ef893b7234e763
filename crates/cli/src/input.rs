use anyhow::{Context, Result};
use std::io::BufRead;

/// Read one peg position per line until a `0` line, a blank line, or end of input.
///
/// The terminating `0` is not a peg. Any other non-integer line is an error.
pub fn read_pegs<R: BufRead>(reader: R) -> Result<Vec<i64>> {
    let mut pegs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("reading line {lineno}"))?;
        let text = line.trim();
        if text.is_empty() {
            break;
        }
        let peg: i64 = text
            .parse()
            .with_context(|| format!("line {lineno}: expected an integer peg position, got {text:?}"))?;
        if peg == 0 {
            break;
        }
        pegs.push(peg);
    }
    tracing::debug!(count = pegs.len(), "read pegs");
    Ok(pegs)
}
