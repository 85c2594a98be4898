use chrono::Utc;

/// Discord epoch (2015-01-01T00:00:00Z) in Unix milliseconds.
pub const DISCORD_EPOCH_MILLIS: i64 = 1_420_070_400_000;

/// Creation time encoded in a Discord snowflake, in Unix milliseconds.
///
/// # Arguments
/// - `snowflake` - Any Discord ID; the top 42 bits are milliseconds since the
///   Discord epoch
pub fn snowflake_created_at_millis(snowflake: u64) -> i64 {
    (snowflake >> 22) as i64 + DISCORD_EPOCH_MILLIS
}

/// Milliseconds elapsed between `created_at_millis` and now.
pub fn latency_since(created_at_millis: i64) -> i64 {
    Utc::now().timestamp_millis() - created_at_millis
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests decoding the timestamp of a known snowflake.
    ///
    /// Expected: 175928847299117063 was created at 1462015105796
    #[test]
    fn decodes_snowflake_timestamp() {
        assert_eq!(snowflake_created_at_millis(175928847299117063), 1462015105796);
    }

    #[test]
    fn latency_is_non_negative_for_past_instants() {
        let created = Utc::now().timestamp_millis() - 250;

        assert!(latency_since(created) >= 250);
    }
}
