//! Location of the data rows inside the response
//!
//! The table sits between a four-line header block (rule, column names,
//! units, rule) and the station information heading. Both markers are
//! matched on whole lines.

use tracing::debug;

use crate::constants::{HEADER_BLOCK_LINES, TABLE_END_MARKER, TABLE_RULE};
use crate::{Error, Result};

/// Line indices delimiting the sounding table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBounds {
    /// Line of the rule opening the header block
    pub header: usize,

    /// First data line (inclusive)
    pub start: usize,

    /// Line of the end marker (exclusive end of the data)
    pub end: usize,
}

impl TableBounds {
    /// Number of lines between the header block and the end marker
    pub fn data_line_count(&self) -> usize {
        self.end - self.start
    }
}

/// Find the header block and the end marker
///
/// The first pointer stops at the first rule; the line three below it must
/// be the rule closing the header block. The second pointer starts after the
/// header block and stops at the first end marker.
pub fn locate_table<S: AsRef<str>>(lines: &[S]) -> Result<TableBounds> {
    let header = lines
        .iter()
        .position(|line| line.as_ref() == TABLE_RULE)
        .ok_or_else(|| Error::malformed_table("table header rule not found"))?;

    let closing = header + HEADER_BLOCK_LINES - 1;
    let closing_line: Option<&str> = lines.get(closing).map(|line| line.as_ref());
    match closing_line {
        Some(line) if line == TABLE_RULE => {}
        Some(_) => {
            return Err(Error::malformed_table(format!(
                "header block opened at line {} is not closed by a rule at line {}",
                header, closing
            )));
        }
        None => {
            return Err(Error::malformed_table(
                "response ends inside the table header block",
            ));
        }
    }

    let start = header + HEADER_BLOCK_LINES;
    let end = lines[start..]
        .iter()
        .position(|line| line.as_ref() == TABLE_END_MARKER)
        .map(|offset| start + offset)
        .ok_or_else(|| Error::malformed_table("table end marker not found"))?;

    let bounds = TableBounds { header, start, end };
    debug!(
        "Table header at line {}, data lines {}..{}",
        bounds.header, bounds.start, bounds.end
    );
    Ok(bounds)
}
