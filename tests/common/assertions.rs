//! Domain-specific assertion macros for matchlog harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! error kind was expected and what actually came back.

/// Assert that a `Result` failed with `MatchLogError::Format` whose message
/// mentions `$needle`.
///
/// ```rust
/// assert_format_error!(parse_match_log(&tokens), "foobar");
/// ```
#[macro_export]
macro_rules! assert_format_error {
    ($result:expr, $needle:expr) => {{
        match $result {
            Err(err @ matchlog_core::MatchLogError::Format { .. }) => {
                let msg = err.to_string();
                assert!(
                    msg.contains($needle),
                    "assert_format_error! failed: message does not mention {:?}\n  message: {}",
                    $needle,
                    msg
                );
            }
            Err(other) => panic!(
                "assert_format_error! failed: expected Format error, got {:?}",
                other
            ),
            Ok(value) => panic!(
                "assert_format_error! failed: expected Format error, got Ok({:?})",
                value
            ),
        }
    }};
}

/// Assert that a `Result` failed with `MatchLogError::Lookup` for `$name`.
#[macro_export]
macro_rules! assert_lookup_error {
    ($result:expr, $name:expr) => {{
        match $result {
            Err(matchlog_core::MatchLogError::Lookup { what, name }) => {
                pretty_assertions::assert_eq!(name, $name, "lookup of {} failed for another name", what);
            }
            Err(other) => panic!(
                "assert_lookup_error! failed: expected Lookup error, got {:?}",
                other
            ),
            Ok(value) => panic!(
                "assert_lookup_error! failed: expected Lookup error, got Ok({:?})",
                value
            ),
        }
    }};
}

/// Assert the (date, match number) keys of a record list, in order.
///
/// ```rust
/// assert_match_keys!(records, [("6/2昼", 1), ("6/2昼", 2)]);
/// ```
#[macro_export]
macro_rules! assert_match_keys {
    ($records:expr, [$(($date:expr, $number:expr)),* $(,)?]) => {{
        let actual: Vec<(String, u32)> = $records
            .iter()
            .map(|r: &matchlog_core::MatchRecord| (r.date.clone(), r.match_number))
            .collect();
        let expected: Vec<(String, u32)> = vec![$(($date.to_string(), $number)),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_match_keys! failed");
    }};
}
