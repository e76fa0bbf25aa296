// Reward-week window math
// A reward week begins Thursday 00:00:00 UTC.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};

/// Start of the reward week containing `t`: the most recent Thursday at
/// midnight UTC (or `t`'s own midnight when `t` falls on a Thursday).
pub fn start_of_reward_week(t: DateTime<Utc>) -> DateTime<Utc> {
    let days_back = (t.weekday().num_days_from_monday() + 7
        - Weekday::Thu.num_days_from_monday())
        % 7;
    let thursday = t.date_naive() - Duration::days(i64::from(days_back));
    thursday.and_time(NaiveTime::MIN).and_utc()
}

/// Calendar-day equality in UTC, used for the once-per-day claim guard.
pub fn same_utc_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}
