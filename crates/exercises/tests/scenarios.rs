//! End-to-end scenarios across the exercises.

use modelkit_exercises::adventure::{self, AdventureConfig};
use modelkit_exercises::event::{Event, EventSource, RawEvent};
use modelkit_exercises::person::{Age, Name, PersonBuilder};
use modelkit_validator::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ============================================================================
// AGES
// ============================================================================

#[rstest]
#[case("120", Ok(120))]
#[case("121", Err(ValidationFailure::rule_violated("<=120")))]
fn age_from_text(#[case] raw: &str, #[case] expected: Result<i64, ValidationFailure>) {
    assert_eq!(Age::parse(raw).map(Age::years), expected);
}

// ============================================================================
// EVENTS
// ============================================================================

fn raw_event(device_id: Option<&str>, user_id: Option<&str>) -> RawEvent {
    RawEvent {
        device_id: device_id.map(str::to_owned),
        user_id: user_id.map(str::to_owned),
        ..RawEvent::default()
    }
}

#[test]
fn device_event_is_classified() {
    let event = Event::classify(raw_event(Some("d1"), None)).unwrap();
    match event.source {
        EventSource::Device(device) => assert_eq!(device.device_id.as_str(), "d1"),
        EventSource::User(user) => panic!("expected a device event, got user {}", user.user_id),
    }
}

#[test]
fn both_ids_are_ambiguous() {
    let err = Event::classify(raw_event(Some("d1"), Some("u1"))).unwrap_err();
    assert_eq!(
        err,
        ClassificationFailure::ambiguous_or_missing(["device_id", "user_id"])
    );
    assert_eq!(ModelError::from(err).code(), "ambiguous_or_missing_variant");
}

// ============================================================================
// PERSON BUILDER
// ============================================================================

#[test]
fn complete_builder_builds_person() {
    let person = PersonBuilder::empty()
        .with_age(Age::new(42).unwrap())
        .with_name(Name::new("Ada").unwrap())
        .build();
    assert_eq!(person.name().as_str(), "Ada");
    assert_eq!(person.age().years(), 42);
}

#[test]
fn incomplete_builder_reports_name_missing() {
    let err = PersonBuilder::empty()
        .with_age(Age::new(42).unwrap())
        .try_build()
        .unwrap_err();
    assert_eq!(err.missing().to_string(), "{NameSet}");
    assert_eq!(err.to_string(), "builder is incomplete, missing {NameSet}");
}

proptest! {
    #[test]
    fn builder_is_order_independent(years in 0_i64..=120, name in "[A-Za-z]{1,20}") {
        let age = Age::new(years).unwrap();
        let name = Name::new(name).unwrap();

        let forward = PersonBuilder::empty().with_age(age).with_name(name.clone());
        let backward = PersonBuilder::empty().with_name(name.clone()).with_age(age);
        prop_assert_eq!(forward.build(), backward.build());
        prop_assert_eq!(forward.try_build(), Ok(forward.build()));
    }

    #[test]
    fn repeated_identical_setter_is_idempotent(years in 0_i64..=120, name in "[A-Za-z]{1,20}") {
        let age = Age::new(years).unwrap();
        let name = Name::new(name).unwrap();

        let once = PersonBuilder::empty().with_name(name.clone()).with_age(age);
        let twice = once.with_age(age);
        prop_assert_eq!(twice.build(), once.build());
        prop_assert_eq!(twice.marks(), once.marks());

        let named_twice = once.with_name(name.clone()).with_name(name);
        prop_assert_eq!(named_twice.build(), once.build());
    }

    #[test]
    fn last_write_wins(first in 0_i64..=120, second in 0_i64..=120) {
        let builder = PersonBuilder::empty()
            .with_name(Name::new("Ada").unwrap())
            .with_age(Age::new(first).unwrap())
            .with_age(Age::new(second).unwrap());
        prop_assert_eq!(builder.build().age().years(), second);
    }
}

// ============================================================================
// ADVENTURE
// ============================================================================

#[test]
fn adventure_transcript() {
    modelkit_log::init_test().unwrap();

    let input = "go north\ntake sword\ngo south\ngo east\nfight troll\ntake treasure\nquit\n";
    let mut output = Vec::new();
    let turns = adventure::run(&AdventureConfig::default(), input.as_bytes(), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(turns, 7);
    assert!(output.contains("Taken: sword."));
    assert!(output.contains("You slay the troll with the sword."));
    assert!(output.contains("You grab the treasure. You win!"));
    assert!(output.ends_with("> Goodbye.\n"));
}
