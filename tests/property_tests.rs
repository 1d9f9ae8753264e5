//! Property tests for secret-access-log.
//!
//! These tests check the formatter's totality and bucket invariants and the
//! resume guard's one-grant-one-resume rule over generated inputs.

use chrono::{FixedOffset, Utc};
use proptest::prelude::*;
use secret_access_log::{
    Bucket, Calendar, Clock, EventType, LogEntry, LogEntryFormatter, ResumeDecision, ResumeGuard,
    Templates,
};

// 2024-03-15 14:30:00 UTC
const NOW: i64 = 1_710_513_000_000;

fn arb_event_type() -> impl Strategy<Value = EventType> {
    prop::sample::select(EventType::ALL.to_vec())
}

fn arb_zone() -> impl Strategy<Value = FixedOffset> {
    (-12 * 3600..=14 * 3600i32).prop_map(|secs| FixedOffset::east_opt(secs).unwrap())
}

#[derive(Debug, Clone, Copy)]
enum GuardOp {
    Grant,
    Regain,
}

fn arb_guard_ops() -> impl Strategy<Value = Vec<GuardOp>> {
    prop::collection::vec(
        prop_oneof![Just(GuardOp::Grant), Just(GuardOp::Regain)],
        0..40,
    )
}

proptest! {
    /// Property: formatting never panics for any entry and reference time
    #[test]
    fn proptest_format_is_total(
        code in any::<i32>(),
        timestamp in any::<i64>(),
        reference in any::<i64>(),
    ) {
        let formatter = LogEntryFormatter::new(Templates::english(), Calendar::fixed(Utc, NOW));
        let entry = LogEntry::from_code(code, timestamp);
        let text = formatter.format(&entry, reference);
        prop_assert!(!text.is_empty());
    }

    /// Property: entries less than a minute old (or in the future) are seconds
    #[test]
    fn proptest_recent_and_future_are_seconds(
        event_type in arb_event_type(),
        offset_ms in -10_000_000_000i64..60_000,
    ) {
        let formatter = LogEntryFormatter::new(Templates::english(), Calendar::fixed(Utc, NOW));
        let entry = LogEntry::new(event_type, NOW - offset_ms);
        prop_assert_eq!(formatter.classify(&entry, NOW), Bucket::Seconds);
    }

    /// Property: the minute count is the floored elapsed minutes
    #[test]
    fn proptest_minute_count_is_floored(
        event_type in arb_event_type(),
        age_ms in 60_000i64..3_600_000,
    ) {
        let formatter = LogEntryFormatter::new(Templates::english(), Calendar::fixed(Utc, NOW));
        let entry = LogEntry::new(event_type, NOW - age_ms);
        prop_assert_eq!(formatter.classify(&entry, NOW), Bucket::Minutes(age_ms / 1000 / 60));
    }

    /// Property: older entries are bucketed by strict comparison to the day anchors
    #[test]
    fn proptest_day_buckets_match_anchors(
        zone in arb_zone(),
        age_ms in 3_600_000i64..10 * 86_400_000,
    ) {
        let calendar = Calendar::fixed(zone, NOW);
        let midnight = calendar.start_of_day(NOW);
        let yesterday = calendar.day_before(midnight);
        let formatter = LogEntryFormatter::new(Templates::english(), calendar);

        let timestamp = NOW - age_ms;
        let expected = if timestamp > midnight {
            Bucket::Today
        } else if timestamp > yesterday {
            Bucket::Yesterday
        } else {
            Bucket::Dated
        };

        let entry = LogEntry::new(EventType::Viewed, timestamp);
        prop_assert_eq!(formatter.classify(&entry, NOW), expected);
    }

    /// Property: formatting is a pure function of its inputs
    #[test]
    fn proptest_format_is_idempotent(
        event_type in arb_event_type(),
        timestamp in 0i64..4_000_000_000_000,
        zone in arb_zone(),
    ) {
        let formatter = LogEntryFormatter::new(Templates::english(), Calendar::fixed(zone, NOW));
        let entry = LogEntry::new(event_type, timestamp);
        prop_assert_eq!(formatter.format(&entry, NOW), formatter.format(&entry, NOW));
    }

    /// Property: every allowed regain after the first is paid for by a grant
    #[test]
    fn proptest_guard_allows_at_most_one_regain_per_grant(ops in arb_guard_ops()) {
        let mut guard = ResumeGuard::new();
        // The initial display counts as one grant.
        let mut pending = true;

        for op in ops {
            match op {
                GuardOp::Grant => {
                    guard.grant_next_resume();
                    pending = true;
                }
                GuardOp::Regain => {
                    let expected = if pending { ResumeDecision::Allow } else { ResumeDecision::Deny };
                    prop_assert_eq!(guard.on_foreground_regain(), expected);
                    pending = false;
                }
            }
        }
    }
}
