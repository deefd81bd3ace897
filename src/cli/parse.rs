//! Parsing utilities for CLI operations

use crate::error::FerroError;
use crate::translate::Direction;

/// Parse a direction name
///
/// # Examples
///
/// ```
/// use ferro_sifts::cli::parse_direction;
/// use ferro_sifts::Direction;
///
/// assert_eq!(parse_direction("unp-to-struct").unwrap(), Direction::UnpToStruct);
/// assert_eq!(parse_direction("pdb").unwrap(), Direction::StructToUnp);
/// assert!(parse_direction("up").is_err());
/// ```
pub fn parse_direction(direction: &str) -> Result<Direction, FerroError> {
    direction
        .parse()
        .map_err(|msg| FerroError::InvalidInput { msg })
}

/// Parse a residue range from one input line
///
/// Accepts `START END`, `START-END`, `START..END`, `START,END`, tab-separated
/// pairs, or a single position. Range validity (positive, ordered) is left to
/// the translator so the error class matches a library call.
///
/// # Examples
///
/// ```
/// use ferro_sifts::cli::parse_range;
///
/// assert_eq!(parse_range("12 14").unwrap(), (12, 14));
/// assert_eq!(parse_range("12-14").unwrap(), (12, 14));
/// assert_eq!(parse_range("12..14").unwrap(), (12, 14));
/// assert_eq!(parse_range("7").unwrap(), (7, 7));
/// assert!(parse_range("abc").is_err());
/// ```
pub fn parse_range(line: &str) -> Result<(i64, i64), FerroError> {
    let line = line.trim();
    let invalid = || FerroError::InvalidInput {
        msg: format!("Invalid range '{}': expected START END or START-END", line),
    };

    let parts: Vec<&str> = if line.contains("..") {
        line.splitn(2, "..").collect()
    } else if line.contains(',') {
        line.splitn(2, ',').collect()
    } else if let Some(idx) = line.get(1..).and_then(|rest| rest.find('-')) {
        // Search from the second character so "-3" stays a single position
        let split = idx + 1;
        vec![&line[..split], &line[split + 1..]]
    } else {
        line.split_whitespace().collect()
    };

    let numbers = parts
        .iter()
        .map(|p| p.trim().parse::<i64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    match numbers.as_slice() {
        [pos] => Ok((*pos, *pos)),
        [start, end] => Ok((*start, *end)),
        _ => Err(invalid()),
    }
}
