//! Page title parsing

use super::UnreadCount;
use once_cell::sync::Lazy;
use regex::Regex;

/// "(3) Messenger"
static LEADING_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\s*([0-9]+)\s*\)").expect("valid leading count pattern"));

/// "Messenger (3)"
static TRAILING_COUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*([0-9]+)\s*\)\s*$").expect("valid trailing count pattern"));

/// Extract the unread count from a page title.
///
/// A leading parenthesised number wins over a trailing one. Anything else,
/// including the empty string, yields zero.
pub fn parse_unread(title: &str) -> UnreadCount {
    LEADING_COUNT
        .captures(title)
        .or_else(|| TRAILING_COUNT.captures(title))
        .and_then(|caps| caps.get(1))
        .map(|digits| parse_digits(digits.as_str()))
        .unwrap_or(UnreadCount::ZERO)
}

/// Digits only reach here through the patterns above, so the sole failure
/// mode is overflow.
fn parse_digits(digits: &str) -> UnreadCount {
    digits
        .parse::<u32>()
        .map(UnreadCount::new)
        .unwrap_or(UnreadCount::new(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(title: &str) -> u32 {
        parse_unread(title).get()
    }

    #[test]
    fn test_leading_count() {
        assert_eq!(count("(3) Messenger"), 3);
        assert_eq!(count("( 14 ) Messenger"), 14);
        assert_eq!(count("(0) Messenger"), 0);
    }

    #[test]
    fn test_trailing_count() {
        assert_eq!(count("Messenger (12)"), 12);
        assert_eq!(count("Messenger ( 2 )   "), 2);
    }

    #[test]
    fn test_no_count() {
        assert_eq!(count("Messenger"), 0);
        assert_eq!(count(""), 0);
        assert_eq!(count("Chat (with Ana) now"), 0);
        assert_eq!(count("Messenger (12) chats"), 0);
        assert_eq!(count(" (3) Messenger"), 0);
    }

    #[test]
    fn test_leading_wins_over_trailing() {
        assert_eq!(count("(2) Messenger (9)"), 2);
    }

    #[test]
    fn test_only_edges_are_considered() {
        assert_eq!(count("Messenger (4) (5)"), 5);
        assert_eq!(count("(4) (5) Messenger"), 4);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(count("(7) Wiadomości • Messenger"), 7);
        assert_eq!(count("Łączenie…"), 0);
        // Arabic-Indic digits are not accepted
        assert_eq!(count("(٣) Messenger"), 0);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(count("(99999999999) Messenger"), u32::MAX);
    }
}
