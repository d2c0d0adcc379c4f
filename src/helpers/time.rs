use chrono::Utc;

pub fn now_i64() -> i64 {
    Utc::now().timestamp()
}

/// Absolute expiry timestamp for a cookie max-age
pub fn expiry_from_max_age(max_age_seconds: u64) -> i64 {
    now_i64() + max_age_seconds as i64
}
