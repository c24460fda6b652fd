//! Application constants for the sounding downloader
//!
//! Endpoint details, table markers and the fixed column schema of the
//! University of Wyoming `TEXT:LIST` sounding page.

// =============================================================================
// Remote Service
// =============================================================================

/// Sounding CGI endpoint of the University of Wyoming upper air archive
pub const DEFAULT_BASE_URL: &str = "http://weather.uwyo.edu/cgi-bin/sounding";

/// Value of the `TYPE` query parameter (URL-encoded `TEXT:LIST`)
pub const LIST_TYPE: &str = "TEXT%3ALIST";

/// Station used when none is given: 11120 LOWI Innsbruck-Flughafen
pub const DEFAULT_STATION_ID: &str = "11120";

/// Region used when none is given
pub const DEFAULT_REGION: &str = "europe";

/// Hour (UTC) of the single daily sounding at the default station
pub const DEFAULT_STATION_SOUNDING_HOUR: u32 = 3;

/// Hours between soundings at stations with two launches per day
pub const TWICE_DAILY_INTERVAL_HOURS: i64 = 12;

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("sounding-downloader/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Response Layout
// =============================================================================

/// Zero-based line inspected for the "no data" marker
pub const AVAILABILITY_LINE_INDEX: usize = 4;

/// Line the service returns at [`AVAILABILITY_LINE_INDEX`] when no sounding exists
pub const NO_DATA_MARKER: &str = "<P>Description of the ";

/// Horizontal rule opening and closing the table header block
pub const TABLE_RULE: &str =
    "-----------------------------------------------------------------------------";

/// Lines in the header block: rule, column names, units, rule
pub const HEADER_BLOCK_LINES: usize = 4;

/// First line after the data rows
pub const TABLE_END_MARKER: &str = "</PRE><H3>Station information and sounding indices</H3><PRE>";

// =============================================================================
// Table Schema
// =============================================================================

/// Column names of a sounding table, in source order
pub const COLUMN_NAMES: [&str; 11] = [
    "pres", "hght", "temp", "dwpt", "relh", "mixr", "drct", "speed", "thta", "thte", "thtv",
];

/// Number of tokens a data line must have to be kept
pub const COLUMN_COUNT: usize = COLUMN_NAMES.len();

// =============================================================================
// Artifact
// =============================================================================

/// Relative file name the CLI persists extracted rows to
pub const DEFAULT_ARTIFACT_NAME: &str = "rawdata.csv";

/// Field delimiter of the persisted artifact
pub const ARTIFACT_DELIMITER: u8 = b' ';

// =============================================================================
// Diagnostics
// =============================================================================

/// Advice printed when the requested sounding is not available
pub const UNAVAILABLE_ADVICE: &str = "Sorry, there is no data of this sounding available. \
You can try to download the data of a different sounding (e.g. yesterday). \
For example fill in the arguments as described in the following:\n\
    --year 2018 --month 10 --from 1703 --to 1704\n\
That will download the data of the 17th of October 2018 for the sounding \
which took place at 03 o'clock at Innsbruck Airport.";
