use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the millisecond precision the store keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
