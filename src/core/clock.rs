use chrono::{DateTime, FixedOffset, Utc};

/// The bank's reference timezone is Asia/Ulaanbaatar, which has been a
/// plain UTC+8 year-round since Mongolia abolished DST in 2017. Using a
/// fixed offset keeps every generated date independent of wherever the
/// host happens to run.
pub const UTC_OFFSET_HOURS: i32 = 8;

pub fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(UTC_OFFSET_HOURS * 3600).expect("UTC+8 is a valid offset")
}

/// Current wall-clock time in the reference timezone.
pub fn now() -> DateTime<FixedOffset> {
    return Utc::now().with_timezone(&reference_offset());
}

/// Calendar date used to group the history, e.g. "2026.08.04".
pub fn format_date(moment: &DateTime<FixedOffset>) -> String {
    return moment.format("%Y.%m.%d").to_string();
}

/// Clock time shown on a transaction row, e.g. "09:05".
pub fn format_time(moment: &DateTime<FixedOffset>) -> String {
    return moment.format("%H:%M").to_string();
}

/// Combined date and time stamp, e.g. "2026/08/04 09:05".
pub fn format_stamp(moment: &DateTime<FixedOffset>) -> String {
    return moment.format("%Y/%m/%d %H:%M").to_string();
}
