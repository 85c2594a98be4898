use crate::service::paginate::{split_text, FIELD_VALUE_LIMIT};
use proptest::prelude::*;

/// Tests that text within the limit is returned whole.
///
/// Expected: single chunk equal to the input
#[test]
fn short_text_is_one_chunk() {
    assert_eq!(split_text("3 Pot of Greed", FIELD_VALUE_LIMIT), vec!["3 Pot of Greed"]);
}

/// Tests that empty input yields a single empty chunk.
#[test]
fn empty_text_is_one_empty_chunk() {
    assert_eq!(split_text("", FIELD_VALUE_LIMIT), vec![""]);
}

/// Tests the hard split when no break characters exist.
///
/// Expected: first chunk is exactly the field limit
#[test]
fn splits_at_limit_without_break_characters() {
    let text = "x".repeat(2000);

    let chunks = split_text(&text, FIELD_VALUE_LIMIT);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].len(), 1024);
    assert_eq!(chunks[1].len(), 976);
}

/// Tests that the last newline in range wins over periods and spaces.
///
/// Expected: chunk ends right after the newline
#[test]
fn prefers_newline() {
    let chunks = split_text("ab. c\nd. e f", 10);

    assert_eq!(chunks, vec!["ab. c\n", "d. e f"]);
}

/// Tests that a period is used when no newline is in range.
///
/// Expected: chunk ends right after the last period
#[test]
fn falls_back_to_period() {
    let chunks = split_text("ab. cd. ef gh", 10);

    assert_eq!(chunks, vec!["ab. cd.", " ef gh"]);
}

/// Tests that a space is used when neither newline nor period is in range.
#[test]
fn falls_back_to_space() {
    let chunks = split_text("abc def ghi", 9);

    assert_eq!(chunks, vec!["abc def ", "ghi"]);
}

/// Tests that a newline just past the limit is not used.
///
/// Expected: split on the space inside the window instead
#[test]
fn ignores_break_characters_beyond_limit() {
    let chunks = split_text("abc defgh\nij", 9);

    assert_eq!(chunks, vec!["abc ", "defgh\nij"]);
}

/// Tests that the limit counts characters, not bytes.
///
/// Expected: four three-byte characters fit a limit of four
#[test]
fn counts_characters_not_bytes() {
    let chunks = split_text("青眼の白龍", 4);

    assert_eq!(chunks, vec!["青眼の白", "龍"]);
}

proptest! {
    /// Chunks always reassemble the input and respect the limit.
    #[test]
    fn chunks_reassemble_within_limit(text in "[a-z .\n]{0,400}", cap in 1usize..64) {
        let chunks = split_text(&text, cap);

        prop_assert_eq!(chunks.concat(), text.clone());
        for chunk in &chunks {
            prop_assert!(chunk.chars().count() <= cap);
            prop_assert!(!chunk.is_empty() || text.is_empty());
        }
    }

    /// The same holds for arbitrary Unicode text.
    #[test]
    fn unicode_chunks_reassemble_within_limit(text in "\\PC{0,200}", cap in 1usize..32) {
        let chunks = split_text(&text, cap);

        prop_assert_eq!(chunks.concat(), text.clone());
        for chunk in &chunks {
            prop_assert!(chunk.chars().count() <= cap);
            prop_assert!(!chunk.is_empty() || text.is_empty());
        }
    }
}
