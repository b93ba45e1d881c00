//! Interactive prompt helper
//!
//! All interactive reads go through here so the recorder and the menu
//! loop can be driven by any reader/writer pair in tests.

use std::io::{BufRead, Write};

use crate::error::TrackerResult;

/// Prompt for one line of input
///
/// Returns `None` on end-of-input, which callers treat as the signal to
/// terminate normally. The returned line is trimmed.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> TrackerResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
