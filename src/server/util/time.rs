use chrono::{NaiveDateTime, SubsecRound, Utc};

/// Current UTC time truncated to whole seconds.
///
/// Timestamps are stored at second precision so that what is persisted matches what
/// the `yyyy-MM-dd HH:mm:ss` wire format can express.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}
