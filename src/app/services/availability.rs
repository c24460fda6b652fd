//! Detection of the service's "no data" page
//!
//! When the archive has no sounding for the requested station and period the
//! service answers with a description page whose fifth line is a fixed marker.

use colored::Colorize;
use tracing::{debug, warn};

use crate::constants::{AVAILABILITY_LINE_INDEX, NO_DATA_MARKER, UNAVAILABLE_ADVICE};

/// Check whether the response carries sounding data
///
/// Returns `false` exactly when line 4 (zero-based) equals the "no data"
/// marker, after printing advice on how to request a sounding that exists.
/// Responses shorter than five lines cannot carry the marker and count as
/// available; the table extractor rejects them if the table is missing.
pub fn check_availability<S: AsRef<str>>(lines: &[S]) -> bool {
    let probe: Option<&str> = lines.get(AVAILABILITY_LINE_INDEX).map(|line| line.as_ref());
    match probe {
        Some(line) if line == NO_DATA_MARKER => {
            warn!("Sounding page reports no data");
            println!("{}", UNAVAILABLE_ADVICE.yellow());
            false
        }
        Some(_) => true,
        None => {
            debug!(
                "Response has only {} lines, no data marker cannot be present",
                lines.len()
            );
            true
        }
    }
}
