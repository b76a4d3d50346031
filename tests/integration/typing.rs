//! Typing animator cadence and invariant tests

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rstest::rstest;
use vita::anim::{DELETE_TICK, HOLD_DELAY, Phase, TYPE_TICK, Typewriter, TypewriterError};

/// One full cycle of a role of `n` characters:
/// `n` type ticks, the hold, then `n` delete ticks 50ms apart.
fn cycle_duration(n: u32) -> Duration {
    TYPE_TICK * n + HOLD_DELAY + DELETE_TICK * n
}

#[rstest]
#[case("Software Enthusiast")]
#[case("IT Lecturer")]
#[case("C")]
fn typing_shows_each_prefix_on_schedule(#[case] role: &str) -> Result<(), TypewriterError> {
    let start = Instant::now();
    let mut tw = Typewriter::new(vec![role.to_string()], start)?;

    let chars: Vec<char> = role.chars().collect();
    for (k, _) in chars.iter().enumerate() {
        let due = start + TYPE_TICK * (u32::try_from(k).unwrap_or(u32::MAX) + 1);

        // One instant before the tick nothing has changed.
        assert!(!tw.poll(due - Duration::from_millis(1)));
        assert!(tw.poll(due));

        let expected: String = chars.iter().take(k + 1).collect();
        assert_eq!(tw.display(), expected);
    }
    assert_eq!(tw.phase(), Phase::Holding);
    Ok(())
}

#[test]
fn full_rotation_visits_every_role_and_wraps() -> Result<(), TypewriterError> {
    let roles = vec![
        "Software Enthusiast".to_string(),
        "IT Lecturer".to_string(),
        "Web Developer".to_string(),
    ];
    let start = Instant::now();
    let mut tw = Typewriter::new(roles.clone(), start)?;

    let mut cycle_start = start;
    for (i, role) in roles.iter().enumerate() {
        assert_eq!(tw.role_index(), i);

        let n = u32::try_from(role.chars().count()).unwrap_or(u32::MAX);

        // Fully typed right at the last type tick.
        tw.poll(cycle_start + TYPE_TICK * n);
        assert_eq!(tw.display(), role.as_str());
        assert_eq!(tw.phase(), Phase::Holding);

        // Emptied exactly at the end of the cycle, index advanced.
        tw.poll(cycle_start + cycle_duration(n));
        assert_eq!(tw.display(), "");
        assert_eq!(tw.role_index(), (i + 1) % roles.len());

        cycle_start += cycle_duration(n);
    }

    // Back at the first role: the rotation wrapped.
    assert_eq!(tw.role_index(), 0);
    Ok(())
}

#[test]
fn deletion_cadence_is_half_the_typing_cadence() -> Result<(), TypewriterError> {
    let start = Instant::now();
    let mut tw = Typewriter::new(vec!["abcd".to_string()], start)?;

    // Type out and wait through the hold.
    let hold_end = start + TYPE_TICK * 4 + HOLD_DELAY;
    tw.poll(hold_end);
    assert_eq!(tw.phase(), Phase::Deleting);
    assert_eq!(tw.display(), "abcd");

    // Each 50ms tick removes exactly one trailing character.
    for (k, expected) in ["abc", "ab", "a", ""].iter().enumerate() {
        let due = hold_end + DELETE_TICK * (u32::try_from(k).unwrap_or(u32::MAX) + 1);
        assert!(tw.poll(due));
        assert_eq!(tw.display(), *expected);
    }
    Ok(())
}

#[test]
fn cancelled_typewriter_never_mutates_again() -> Result<(), TypewriterError> {
    let start = Instant::now();
    let mut tw = Typewriter::new(vec!["abc".to_string()], start)?;
    tw.poll(start + TYPE_TICK * 2);
    let frozen = tw.display().to_string();

    tw.cancel();
    for minutes in 1..=5u64 {
        assert!(!tw.poll(start + Duration::from_secs(minutes * 60)));
        assert_eq!(tw.display(), frozen);
    }
    Ok(())
}

proptest! {
    /// For any role list and any polling pattern, the visible string is
    /// always a character prefix of the current role and the counters
    /// stay in range.
    #[test]
    fn display_is_always_a_prefix(
        roles in proptest::collection::vec(
            proptest::collection::vec(any::<char>(), 0..8)
                .prop_map(|cs| cs.into_iter().collect::<String>()),
            1..4,
        ),
        steps in proptest::collection::vec(1u64..400, 0..60),
    ) {
        let start = Instant::now();
        let Ok(mut tw) = Typewriter::new(roles.clone(), start) else {
            return Err(TestCaseError::fail("non-empty role list was rejected"));
        };

        let mut now = start;
        for step in steps {
            now += Duration::from_millis(step);
            tw.poll(now);

            prop_assert!(tw.role_index() < roles.len());
            let role = &roles[tw.role_index()];
            prop_assert!(tw.shown_chars() <= role.chars().count());
            let prefix: String = role.chars().take(tw.shown_chars()).collect();
            prop_assert_eq!(tw.display(), prefix.as_str());
        }
    }
}
