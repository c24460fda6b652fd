//! Test fixtures for sounding table extraction
//!
//! Pages are trimmed copies of the University of Wyoming `TEXT:LIST` output.


/// Opening of every sounding page, up to and including the table header block
pub fn page_head() -> Vec<String> {
    [
        "<HTML>",
        "<TITLE>University of Wyoming - Radiosonde Data</TITLE>",
        "<LINK REL=\"StyleSheet\" HREF=\"/resources/select.css\" TYPE=\"text/css\">",
        "<BODY BGCOLOR=\"white\">",
        "<H2>11120 LOWI Innsbruck-Flughafen Observations at 03Z 17 Sep 2018</H2>",
        "<PRE>",
        "-----------------------------------------------------------------------------",
        "   PRES   HGHT   TEMP   DWPT   RELH   MIXR   DRCT   SKNT   THTA   THTE   THTV",
        "    hPa     m      C      C      %    g/kg    deg   knot     K      K      K ",
        "-----------------------------------------------------------------------------",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Closing of a sounding page, starting at the end marker
pub fn page_tail() -> Vec<String> {
    [
        "</PRE><H3>Station information and sounding indices</H3><PRE>",
        "                         Station identifier: LOWI",
        "                             Station number: 11120",
        "</PRE>",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Page with a blank surface level followed by six complete levels
pub fn sample_page() -> Vec<String> {
    let data = [
        " 1000.0    188                                                               ",
        "  956.0    593   15.8   14.8     94  11.19    280      4  292.7  324.7  294.7",
        "776.0 2277 4.2 0.9 79 5.29 331 6 298.2 314.1 299.1",
        "752.0 2533 5.0 -18.0 17 1.24 351 7 301.8 305.9 302.0",
        "700.0 3114 1.8 -9.2 44 2.73 35 8 304.4 313.2 304.9",
        "650.0 3706 -2.3 -9.8 56 2.81 15 11 306.3 315.4 306.8",
        "643.0 3792 -2.9 -9.9 59 2.82 8 11 306.6 315.7 307.1",
    ];
    build_page(&data)
}

/// Page whose table interleaves complete and incomplete levels
pub fn ragged_page() -> Vec<String> {
    let data = [
        " 1000.0    188                                                               ",
        "  925.0    858                                                               ",
        "  956.0    593   15.8   14.8     94  11.19    280      4  292.7  324.7  294.7",
        "  900.0   1031   12.0                           290      6  293.3             ",
        "  850.0   1509    9.4    6.1     80   7.04    300      8  296.2  316.4  297.5",
        "   10.0  30950  -48.1                                       886.2             ",
        "",
        "    7.4  32871  -43.3  -80.3      1   0.00                  979.2  979.2  979.2",
        "    7.0  33210  -42.7  -80.0      1   0.00    245     29  996.0  996.0  996.0",
    ];
    build_page(&data)
}

/// Page returned when the archive holds no sounding for the request
pub fn no_data_page() -> Vec<String> {
    [
        "<HTML>",
        "<TITLE>University of Wyoming - Radiosonde Data</TITLE>",
        "<LINK REL=\"StyleSheet\" HREF=\"/resources/select.css\" TYPE=\"text/css\">",
        "<BODY BGCOLOR=\"white\">",
        "<P>Description of the ",
        "-----------------------------------------------------------------------------",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Assemble a page around the given data lines
pub fn build_page(data: &[&str]) -> Vec<String> {
    let mut lines = page_head();
    lines.extend(data.iter().map(|s| s.to_string()));
    lines.extend(page_tail());
    lines
}
