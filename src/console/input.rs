//! Console input parsing.
//!
//! Prompt helpers generic over [`BufRead`] and [`Write`] so scripted
//! sessions can drive the menu in tests. Malformed numeric input is
//! detected, the rest of the bad line discarded, and the prompt repeated;
//! the core never sees an unvalidated value. Every helper returns
//! `Ok(None)` on end of input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

/// Reads one line and trims surrounding whitespace.
///
/// Returns `Ok(None)` on end of input.
pub fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prints a prompt and reads one trimmed line, which may be empty.
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{prompt}")?;
    writer.flush()?;
    read_trimmed_line(reader)
}

/// Prompts repeatedly until a non-empty line is entered.
pub fn prompt_nonempty_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    loop {
        let Some(line) = prompt_line(reader, writer, prompt)? else {
            return Ok(None);
        };
        if !line.is_empty() {
            return Ok(Some(line));
        }
    }
}

/// Prompts repeatedly until the first token of a line parses as `T`.
///
/// The remainder of a malformed line is discarded before re-prompting.
pub fn prompt_parsed<T, R, W>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = prompt_line(reader, writer, prompt)? else {
            return Ok(None);
        };
        let token = line.split_whitespace().next().unwrap_or("");
        match token.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(writer, "Invalid input, try again.")?,
        }
    }
}

/// Prompts repeatedly until a decimal within `[min, max]` is entered.
pub fn prompt_decimal_in_range<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    min: Decimal,
    max: Decimal,
) -> io::Result<Option<Decimal>> {
    loop {
        let Some(value) = prompt_parsed::<Decimal, _, _>(reader, writer, prompt)? else {
            return Ok(None);
        };
        if value >= min && value <= max {
            return Ok(Some(value));
        }
    }
}

/// Prompts repeatedly until a decimal of at least `min` is entered.
pub fn prompt_decimal_at_least<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    min: Decimal,
) -> io::Result<Option<Decimal>> {
    loop {
        let Some(value) = prompt_parsed::<Decimal, _, _>(reader, writer, prompt)? else {
            return Ok(None);
        };
        if value >= min {
            return Ok(Some(value));
        }
    }
}
