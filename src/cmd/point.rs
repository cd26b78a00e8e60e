use std::io::{BufRead, Read, Write};

use anyhow::Context;
use sx::point::{self, Point};

use super::*;

/// Parse each point and write it back in canonical form, one per line.
/// When `points` is empty they are read from `input`, split on whitespace.
pub fn execute<R, W>(
    mut input: R,
    output: &mut W,
    points: Vec<String>,
    json: bool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let points = if points.is_empty() {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        let tokens: Vec<String> = text.split_whitespace().map(String::from).collect();
        if tokens.is_empty() {
            // nothing to read is still a malformed point
            vec![String::new()]
        } else {
            tokens
        }
    } else {
        points
    };
    log::info!("converting {} point(s)", points.len());

    for token in &points {
        let point: Point =
            point::parse(token).with_context(|| format!("invalid point '{token}'"))?;
        log::debug!("hash {} index {}", point.hash(), point.index());

        if json {
            writeln!(output, "{}", serde_json::to_string(&point)?)?;
        } else {
            writeln!(output, "{}", point::format(&point))?;
        }
    }

    Ok(())
}
