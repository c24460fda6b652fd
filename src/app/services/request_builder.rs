//! Request target construction for the sounding service
//!
//! Resolves unset request fields against the configuration and the current
//! UTC time, then renders the query string the CGI endpoint expects.

use chrono::{Datelike, NaiveDateTime, Timelike, Utc};
use tracing::debug;

use crate::app::models::SoundingRequest;
use crate::config::SoundingConfig;
use crate::constants::{
    DEFAULT_STATION_ID, DEFAULT_STATION_SOUNDING_HOUR, LIST_TYPE, TWICE_DAILY_INTERVAL_HOURS,
};

/// Build the request URL with the default configuration at the current UTC time
pub fn build_request_target(request: &SoundingRequest) -> String {
    build_request_target_at(request, &SoundingConfig::default(), Utc::now().naive_utc())
}

/// Build the request URL, resolving defaults against `now`
pub fn build_request_target_at(
    request: &SoundingRequest,
    config: &SoundingConfig,
    now: NaiveDateTime,
) -> String {
    let station_id = request
        .station_id
        .as_deref()
        .unwrap_or(&config.default_station_id);
    let region = request.region.as_deref().unwrap_or(&config.default_region);

    let year = request
        .year
        .clone()
        .unwrap_or_else(|| format!("{:04}", now.year()));
    let month = request
        .month
        .clone()
        .unwrap_or_else(|| format!("{:02}", now.month()));
    let from_date = request
        .from_date
        .clone()
        .unwrap_or_else(|| from_day_time(Some(station_id), now));
    let to_date = request
        .to_date
        .clone()
        .unwrap_or_else(|| format!("{:02}{:02}", now.day(), now.hour()));

    let url = format!(
        "{}?region={}&TYPE={}&YEAR={}&MONTH={}&FROM={}&TO={}&STNM={}",
        config.base_url, region, LIST_TYPE, year, month, from_date, to_date, station_id
    );
    debug!("Built request target: {}", url);
    url
}

/// Day and hour (`DDHH`) of the most recent sounding before `now`
///
/// The default station launches once a day at 03 UTC, so its last sounding is
/// today's once that hour has passed and yesterday's otherwise, always with
/// hour `00`. Other stations launch every 12 hours; the hour is taken 12 hours
/// back and wraps into the previous day when needed.
pub fn from_day_time(station_id: Option<&str>, now: NaiveDateTime) -> String {
    let today = now.date();
    let yesterday = today.pred_opt().unwrap_or(today);
    let hour_now = i64::from(now.hour());

    let once_daily = station_id.is_none_or(|id| id == DEFAULT_STATION_ID);

    let (day, hour) = if once_daily {
        let day = if hour_now >= i64::from(DEFAULT_STATION_SOUNDING_HOUR) {
            today
        } else {
            yesterday
        };
        (day, 0)
    } else {
        let hour_start = hour_now - TWICE_DAILY_INTERVAL_HOURS;
        if hour_start < 0 {
            (yesterday, hour_start + 24)
        } else {
            (today, hour_start)
        }
    };

    format!("{:02}{:02}", day.day(), hour)
}
