mod common;

use std::time::Duration;

use common::*;
use howl::{Permissions, commands::Converter};
use proptest::prelude::*;
use wolfbot::DateDiff;

const PERMANENT: [&str; 6] = ["0", "perm", "permanent", "inf", "infinite", "-"];

#[tokio::test]
async fn permanent_tokens_never_become_zero() {
    let test = build(den(Permissions::VIEW_CHANNEL));

    for token in PERMANENT {
        let diff = DateDiff::convert(&test.context, token.to_string()).await.unwrap();

        assert_eq!(diff, DateDiff::Permanent, "{token}");
        assert_eq!(diff.duration(), None);
    }
}

#[test]
fn zero_with_a_unit_is_a_zero_duration() {
    let diff = DateDiff::parse("0s").unwrap();

    assert_eq!(diff, DateDiff::Relative(Duration::ZERO));
    assert!(!diff.is_permanent());
}

#[test]
fn sentinels_are_case_sensitive() {
    let error = DateDiff::parse("PERM").unwrap_err();
    let expected = humantime::parse_duration("PERM").unwrap_err().to_string();

    assert_eq!(error.converter_message(), Some(expected.as_str()));
}

#[test]
fn compound_durations() {
    assert_eq!(
        DateDiff::parse("1h 30m").unwrap().duration(),
        Some(Duration::from_secs(90 * 60))
    );
    assert_eq!(
        DateDiff::parse("2d").unwrap().duration(),
        Some(Duration::from_secs(2 * 24 * 60 * 60))
    );
}

#[tokio::test]
async fn parser_errors_are_passed_through_verbatim() {
    let test = build(den(Permissions::VIEW_CHANNEL));

    let error = DateDiff::convert(&test.context, "soon".to_string())
        .await
        .unwrap_err();
    let expected = humantime::parse_duration("soon").unwrap_err().to_string();

    assert_eq!(error.converter_message(), Some(expected.as_str()));
}

#[tokio::test]
async fn reads_its_word_from_the_invocation() {
    let test = build(den(Permissions::VIEW_CHANNEL).content("perm being rude"));

    assert_eq!(
        DateDiff::from_context(&test.context).await.unwrap(),
        DateDiff::Permanent
    );
    assert_eq!(
        DateDiff::from_context(&test.context).await.unwrap_err().converter_message(),
        Some(humantime::parse_duration("being").unwrap_err().to_string().as_str())
    );
}

fn duration_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,5}(ns|us|ms|s|m|h|d|w|min|sec|hours|days)",
        "[0-9]{1,3}h ?[0-9]{1,3}m",
        "[0-9a-z -]{0,12}",
    ]
}

proptest! {
    #[test]
    fn everything_else_matches_the_parser(input in duration_like()) {
        prop_assume!(!PERMANENT.contains(&input.as_str()));

        match (DateDiff::parse(&input), humantime::parse_duration(&input)) {
            (Ok(diff), Ok(duration)) => prop_assert_eq!(diff, DateDiff::Relative(duration)),
            (Err(error), Err(expected)) => {
                let expected = expected.to_string();
                prop_assert_eq!(error.converter_message(), Some(expected.as_str()));
            }
            (diff, expected) => prop_assert!(false, "{diff:?} vs {expected:?}"),
        }
    }
}
