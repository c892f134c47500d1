//! Identifier grammar rules
//!
//! Character classes and identifier rules for nicknames and usernames, as
//! RFC 2812 section 2.3.1 defines them (with this server's own reservations).
//! Every rule is a plain function, so each one is a [`Predicate`] as-is and
//! coerces to [`Rule`].
//!
//! [`Predicate`]: super::Predicate

use super::combinators::{Or, Predicate};

/// Function-pointer form of a grammar rule.
pub type Rule = fn(usize, char) -> bool;

/// Maximum number of characters in a nickname.
///
/// Enforced per character by [`nickname`]: any character at position
/// `MAXIMUM_NICK_LEN` or beyond is rejected.
pub const MAXIMUM_NICK_LEN: usize = 15;

/// Checks if `r` is a letter: `A`-`Z` or `a`-`z`.
#[inline]
pub fn letter(_i: usize, r: char) -> bool {
    r.is_ascii_uppercase() || r.is_ascii_lowercase()
}

/// Checks if `r` is a special character.
///
/// Accepts the ranges `]`-`` ` `` and `{`-`}`, i.e. one of
/// ``] ^ _ ` { | }``.
#[inline]
pub fn special(_i: usize, r: char) -> bool {
    (']'..='`').contains(&r) || ('{'..='}').contains(&r)
}

/// Checks if `r` is a digit: `0`-`9`.
#[inline]
pub fn digit(_i: usize, r: char) -> bool {
    r.is_ascii_digit()
}

fn hyphen(_i: usize, r: char) -> bool {
    r == '-'
}

const NICK_FIRST: Or<Rule, Rule> = Or(letter, special);

const NICK_REST: Or<Or<Rule, Rule>, Or<Rule, Rule>> = Or(Or(letter, digit), Or(special, hyphen));

/// Checks if `r` at position `i` is a valid nickname character.
///
/// The first character must be a letter or special; later ones may also be
/// a digit or `-`. Positions from [`MAXIMUM_NICK_LEN`] on are always
/// rejected.
///
/// ```rust
/// use ircident::predicate::*;
///
/// assert!(nickname(0, 'n'));
/// assert!(!nickname(0, '9'));
/// assert!(nickname(1, '9'));
/// assert!(!nickname(MAXIMUM_NICK_LEN, 'n'));
/// ```
pub fn nickname(i: usize, r: char) -> bool {
    if i >= MAXIMUM_NICK_LEN {
        return false;
    }
    if i == 0 {
        return NICK_FIRST.check(i, r);
    }

    NICK_REST.check(i, r)
}

/// Checks if `r` is a valid username character.
///
/// Everything is allowed except NUL, CR, LF, space and `@`, which the
/// protocol bars, anything above U+00FF, and `~` and `*`, which the server
/// reserves for ident prefixes and masks. There is no length limit.
///
/// ```rust
/// use ircident::predicate::*;
///
/// assert!(username(0, 'j'));
/// assert!(username(0, '\u{e9}'));
/// assert!(!username(3, '@'));
/// assert!(!username(0, '\u{100}'));
/// ```
pub fn username(_i: usize, r: char) -> bool {
    !matches!(r, '\0' | '\r' | '\n' | ' ' | '@' | '~' | '*') && u32::from(r) <= 0xFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter() {
        for r in ('A'..='Z').chain('a'..='z') {
            assert!(letter(0, r), "{r:?}");
            assert!(letter(42, r), "{r:?}");
        }
        for r in ['@', '[', '`', '{', '0', '-', ' ', '\u{e9}', '\u{41f}'] {
            assert!(!letter(0, r), "{r:?}");
        }
    }

    #[test]
    fn test_special() {
        for r in [']', '^', '_', '`', '{', '|', '}'] {
            assert!(special(0, r), "{r:?}");
        }
        for r in ['\\', '[', '~', 'a', 'Z', '0', '-', '@'] {
            assert!(!special(0, r), "{r:?}");
        }
    }

    #[test]
    fn test_digit() {
        for r in '0'..='9' {
            assert!(digit(7, r));
        }
        assert!(!digit(0, 'a'));
        assert!(!digit(0, '\u{661}')); // ARABIC-INDIC DIGIT ONE
    }

    #[test]
    fn test_nickname_first_position() {
        assert!(nickname(0, 'a'));
        assert!(nickname(0, 'Z'));
        assert!(nickname(0, '_'));
        assert!(nickname(0, '|'));
        assert!(!nickname(0, '0'));
        assert!(!nickname(0, '-'));
        assert!(!nickname(0, ' '));
    }

    #[test]
    fn test_nickname_later_positions() {
        for i in 1..MAXIMUM_NICK_LEN {
            assert!(nickname(i, 'a'));
            assert!(nickname(i, '5'));
            assert!(nickname(i, '-'));
            assert!(nickname(i, '`'));
            assert!(!nickname(i, '.'));
            assert!(!nickname(i, '@'));
        }
    }

    #[test]
    fn test_nickname_length_cap() {
        assert!(nickname(MAXIMUM_NICK_LEN - 1, 'a'));
        assert!(!nickname(MAXIMUM_NICK_LEN, 'a'));
        assert!(!nickname(usize::MAX, 'a'));
    }

    #[test]
    fn test_username_barred() {
        for r in ['\0', '\r', '\n', ' ', '@', '~', '*', '\u{100}', '\u{1F600}'] {
            assert!(!username(0, r), "{r:?}");
        }
    }

    #[test]
    fn test_username_allowed() {
        for r in ['a', 'Z', '0', '-', '.', '_', '!', '\t', '\u{ff}'] {
            assert!(username(0, r), "{r:?}");
        }
        assert!(username(10_000, 'a'));
    }
}
