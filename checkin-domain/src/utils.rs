// Clock helpers

use time::OffsetDateTime;

pub fn millis_to_utc(ms: i64) -> OffsetDateTime {
    let nanos = i128::from(ms).saturating_mul(1_000_000);
    OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn current_millis() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() as i64 / 1_000_000
}

pub fn minutes_between(earlier_ms: i64, later_ms: i64) -> f64 {
    (later_ms - earlier_ms) as f64 / 60_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_millis_is_recent() {
        // Anything before 2023 means the clock helper is broken.
        assert!(current_millis() > 1_672_531_200_000);
    }

    #[test]
    fn millis_round_trip_through_utc() {
        let ms = 1_700_000_000_123;
        let utc = millis_to_utc(ms);
        assert_eq!(utc.unix_timestamp_nanos() / 1_000_000, i128::from(ms));
    }

    #[test]
    fn minutes_between_is_signed() {
        assert_eq!(minutes_between(0, 300_000), 5.0);
        assert_eq!(minutes_between(300_000, 0), -5.0);
    }
}
