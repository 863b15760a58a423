//! Plain-text map format: a whitespace-separated matrix of tile codes.
//!
//! Ambient test/demo tooling — not part of the coordination core itself, but
//! the standard way to get a [`Environment`](crate::Environment) into tests
//! and the bundled demo without hand-populating tile vectors.

use crate::error::{EnvError, EnvResult};
use crate::tile::TileKind;

/// Parse a map in the §6 text format into row-major tile rows suitable for
/// [`crate::EnvironmentBuilder::from_rows`].
pub fn parse_map(text: &str) -> EnvResult<Vec<Vec<TileKind>>> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for token in trimmed.split_whitespace() {
            let code: u8 = token
                .parse()
                .map_err(|_| EnvError::Parse(format!("line {}: not an integer: {token:?}", line_no + 1)))?;
            let tile = TileKind::from_code(code)
                .ok_or_else(|| EnvError::Parse(format!("line {}: unknown tile code {code}", line_no + 1)))?;
            row.push(tile);
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(EnvError::InvalidMap("map text contains no rows".into()));
    }
    Ok(rows)
}
