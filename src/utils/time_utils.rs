use crate::error::ConsoleError;
use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc,
};

/// Value format of an HTML `datetime-local` input.
pub const FORM_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const FORM_INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Initial value of the schedule field: two hours from now, local time.
pub fn default_schedule_input() -> String {
    (Local::now() + Duration::hours(2))
        .format(FORM_INPUT_FORMAT)
        .to_string()
}

/// Interprets a naive form value in the local timezone and returns the UTC
/// instant, e.g. `2024-01-01T01:00:00.000Z`.
pub fn local_input_to_utc(input: &str) -> Result<String, ConsoleError> {
    naive_input_to_utc(input, &Local)
}

pub fn naive_input_to_utc<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<String, ConsoleError> {
    let input = input.trim();
    let naive = NaiveDateTime::parse_from_str(input, FORM_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, FORM_INPUT_FORMAT_SECONDS))
        .map_err(|_| ConsoleError::InvalidSchedule(input.to_string()))?;

    // Ambiguous wall-clock times (DST fall-back) resolve to the earlier one.
    let instant = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // Inside a spring-forward gap: apply the offset in effect before
            // the gap, which pushes the wall-clock time past it.
            let before = tz
                .offset_from_local_datetime(&(naive - Duration::hours(1)))
                .earliest()
                .ok_or_else(|| ConsoleError::InvalidSchedule(input.to_string()))?;
            let offset = Duration::seconds(i64::from(before.fix().local_minus_utc()));
            Utc.from_utc_datetime(&(naive - offset))
        }
    };

    Ok(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Human-readable local time for a backend timestamp. Offset-less values are
/// taken as local time; anything unparseable is shown as-is.
pub fn display_schedule(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => naive.format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
