//! Integration tests for the full download pipeline
//!
//! A canned line source stands in for the University of Wyoming service so
//! the request, availability, extraction and materialization stages run
//! together without network access.

use sounding_downloader::{
    Error, LineSource, Result, SoundingClient, SoundingConfig, SoundingRequest,
};
use tempfile::TempDir;

/// Serves the same page for every URL
struct CannedPage {
    lines: Vec<String>,
}

impl CannedPage {
    fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl LineSource for CannedPage {
    fn fetch_lines(&self, _url: &str) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

const RULE: &str = "-----------------------------------------------------------------------------";

fn innsbruck_page() -> Vec<String> {
    lines(&[
        "<HTML>",
        "<TITLE>University of Wyoming - Radiosonde Data</TITLE>",
        "<LINK REL=\"StyleSheet\" HREF=\"/resources/select.css\" TYPE=\"text/css\">",
        "<BODY BGCOLOR=\"white\">",
        "<H2>11120 LOWI Innsbruck-Flughafen Observations at 03Z 17 Oct 2018</H2>",
        "<PRE>",
        RULE,
        "   PRES   HGHT   TEMP   DWPT   RELH   MIXR   DRCT   SKNT   THTA   THTE   THTV",
        "    hPa     m      C      C      %    g/kg    deg   knot     K      K      K ",
        RULE,
        " 1000.0    188                                                               ",
        "  956.0    593   15.8   14.8     94  11.19    280      4  292.7  324.7  294.7",
        "  925.0    858   12.6   11.9     95   9.59    285      5  292.1  319.6  293.8",
        "  900.0   1031   12.0                           290      6  293.3             ",
        "  850.0   1509    9.4    6.1     80   7.04    300      8  296.2  316.4  297.5",
        "</PRE><H3>Station information and sounding indices</H3><PRE>",
        "                         Station identifier: LOWI",
        "                             Station number: 11120",
        "</PRE>",
    ])
}

fn no_data_page() -> Vec<String> {
    lines(&[
        "<HTML>",
        "<TITLE>University of Wyoming - Radiosonde Data</TITLE>",
        "<LINK REL=\"StyleSheet\" HREF=\"/resources/select.css\" TYPE=\"text/css\">",
        "<BODY BGCOLOR=\"white\">",
        "<P>Description of the ",
        "TEXT:LIST output format",
    ])
}

fn october_request() -> SoundingRequest {
    SoundingRequest::latest()
        .with_station("11120")
        .with_year("2018")
        .with_month("10")
        .with_period("1703", "1704")
}

#[test]
fn test_download_parses_complete_levels() {
    let client =
        SoundingClient::with_source(SoundingConfig::default(), CannedPage::new(innsbruck_page()));

    let sounding = client.download(&october_request()).unwrap();

    assert_eq!(sounding.table.height(), 3);
    assert_eq!(sounding.rows_dropped, 2);
    assert_eq!(
        sounding.table.column("pres").unwrap(),
        vec![Some(956.0), Some(925.0), Some(850.0)]
    );
    assert_eq!(
        sounding.table.column("thtv").unwrap(),
        vec![Some(294.7), Some(293.8), Some(297.5)]
    );
}

#[test]
fn test_download_requests_the_built_url() {
    let source = CannedPage::new(innsbruck_page());
    let client = SoundingClient::with_source(SoundingConfig::default(), source);

    let sounding = client.download(&october_request()).unwrap();

    assert_eq!(
        sounding.url,
        "http://weather.uwyo.edu/cgi-bin/sounding?region=europe&TYPE=TEXT%3ALIST\
         &YEAR=2018&MONTH=10&FROM=1703&TO=1704&STNM=11120"
    );
}

#[test]
fn test_base_url_override_reaches_the_source() {
    let config = SoundingConfig::default().with_base_url("http://localhost:8000/sounding");
    let client = SoundingClient::with_source(config, CannedPage::new(innsbruck_page()));

    let sounding = client.download(&october_request()).unwrap();
    assert!(
        sounding
            .url
            .starts_with("http://localhost:8000/sounding?region=europe&TYPE=TEXT%3ALIST")
    );
}

#[test]
fn test_no_data_page_is_unavailable() {
    let client =
        SoundingClient::with_source(SoundingConfig::default(), CannedPage::new(no_data_page()));

    let result = client.download(&october_request());

    match result {
        Err(error) => {
            assert!(error.is_unavailable());
            assert!(error.to_string().contains("STNM=11120"));
        }
        Ok(_) => panic!("Expected unavailable sounding"),
    }
}

#[test]
fn test_no_data_page_writes_no_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rawdata.csv");
    let config = SoundingConfig::default().with_artifact_path(&path);
    let client = SoundingClient::with_source(config, CannedPage::new(no_data_page()));

    assert!(client.download(&october_request()).is_err());
    assert!(!path.exists());
}

#[test]
fn test_page_without_table_is_malformed() {
    let page = lines(&[
        "<HTML>",
        "<TITLE>University of Wyoming - Radiosonde Data</TITLE>",
        "<BODY BGCOLOR=\"white\">",
        "<H2>Service temporarily unavailable</H2>",
        "<P>Please try again later.</P>",
        "</HTML>",
    ]);
    let client = SoundingClient::with_source(SoundingConfig::default(), CannedPage::new(page));

    let result = client.download(&october_request());
    assert!(matches!(result, Err(Error::MalformedTable { .. })));
}

#[test]
fn test_artifact_round_trip_matches_in_memory_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rawdata.csv");

    let in_memory = SoundingClient::with_source(
        SoundingConfig::default(),
        CannedPage::new(innsbruck_page()),
    )
    .download(&october_request())
    .unwrap();

    let via_file = SoundingClient::with_source(
        SoundingConfig::default().with_artifact_path(&path),
        CannedPage::new(innsbruck_page()),
    )
    .download(&october_request())
    .unwrap();

    assert!(path.exists());
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 3);
    assert!(written.starts_with("956.0 593 15.8 14.8 94 11.19 280 4 292.7 324.7 294.7"));

    assert!(
        via_file
            .table
            .frame()
            .equals_missing(in_memory.table.frame())
    );
}

#[test]
fn test_artifact_is_replaced_on_each_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rawdata.csv");
    std::fs::write(&path, "stale contents from an earlier run\n").unwrap();

    let config = SoundingConfig::default().with_artifact_path(&path);
    let client = SoundingClient::with_source(config, CannedPage::new(innsbruck_page()));
    let sounding = client.download(&october_request()).unwrap();

    assert_eq!(sounding.table.height(), 3);
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(!written.contains("stale"));
}
