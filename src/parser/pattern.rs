//! Wildcard patterns used by the transition table
//!
//! Every byte of a pattern is a literal except these wildcards:
//!
//! | code | matches |
//! |------|---------|
//! | `a`  | one ASCII alphanumeric byte |
//! | `A`  | one alphanumeric byte or one of [`BODY_CHARS`] |
//! | `S`  | one whitespace byte |
//! | `s`  | zero or more whitespace bytes |
//! | `0`  | end of input |
//!
//! `s` is greedy and never gives anything back. A pattern must not follow it
//! with an element that could itself match whitespace (`S`, another `s`, or a
//! literal space), because that element would never see the whitespace `s`
//! already swallowed.

/// Bytes that, besides alphanumerics, may start a body, attribute value or
/// comment.
pub const BODY_CHARS: &[u8] = b"!@#$%^&*()-_=+[{]}\\/|;:,.?";

pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn is_body_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || BODY_CHARS.contains(&b)
}

/// Matches `pattern` against the start of `input`.
///
/// On a match, returns how many bytes to skip. That is one less than the
/// number of positions matched: the last matched byte is left in place so the
/// next state reads it again (the `<` that ends a body is also the start of
/// the next tag). End of input counts as one position under `0`.
pub fn match_pattern(input: &[u8], pattern: &str) -> Option<usize> {
    let mut pos = 0usize;

    for code in pattern.bytes() {
        let current = input.get(pos).copied();
        match code {
            b'a' => {
                if !current.is_some_and(|b| b.is_ascii_alphanumeric()) {
                    return None;
                }
                pos += 1;
            }
            b'A' => {
                if !current.is_some_and(is_body_char) {
                    return None;
                }
                pos += 1;
            }
            b'S' => {
                if !current.is_some_and(is_space) {
                    return None;
                }
                pos += 1;
            }
            b's' => {
                while input.get(pos).copied().is_some_and(is_space) {
                    pos += 1;
                }
            }
            b'0' => {
                if current.is_some() {
                    return None;
                }
                pos += 1;
            }
            literal => {
                if current != Some(literal) {
                    return None;
                }
                pos += 1;
            }
        }
    }

    // a pattern that matched nothing (only `s` over non-whitespace) is no match
    pos.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_and_alnum() {
        assert_eq!(match_pattern(b"><b/>", "s>s<a"), Some(2));
        assert_eq!(match_pattern(b"></b>", "s>s<a"), None);
        assert_eq!(match_pattern(b"></b>", "s>s</a"), Some(3));
    }

    #[test]
    fn test_whitespace_counts_towards_offset() {
        assert_eq!(match_pattern(b" \n\t>  <b", "s>s<a"), Some(7));
        assert_eq!(match_pattern(b" x=", "Ssa"), Some(1));
        assert_eq!(match_pattern(b"   x=", "Ssa"), Some(3));
        assert_eq!(match_pattern(b"x=", "Ssa"), None);
    }

    #[test]
    fn test_body_chars() {
        assert_eq!(match_pattern(b">hello", "s>sA"), Some(1));
        assert_eq!(match_pattern(b">/path", "s>sA"), Some(1));
        assert_eq!(match_pattern(b"><b>", "s>sA"), None);
        assert_eq!(match_pattern(b">\"", "s>sA"), None);
        assert_eq!(match_pattern(b">", "s>sA"), None);
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(match_pattern(b"/>", "s/>s0"), Some(2));
        assert_eq!(match_pattern(b"/> \n", "s/>s0"), Some(4));
        assert_eq!(match_pattern(b"/><a/>", "s/>s0"), None);
        assert_eq!(match_pattern(b">", "s>s0"), Some(1));
    }

    #[test]
    fn test_greedy_whitespace_does_not_backtrack() {
        // the space after `s` is never available to `S`
        assert_eq!(match_pattern(b"  x", "sSa"), None);
        assert_eq!(match_pattern(b"  x", "Ssa"), Some(2));
    }

    #[test]
    fn test_empty_match_is_no_match() {
        assert_eq!(match_pattern(b"abc", "s"), None);
        assert_eq!(match_pattern(b"", ""), None);
        assert_eq!(match_pattern(b" abc", "s"), Some(0));
    }

    #[test]
    fn test_vertical_tab_and_form_feed_are_space() {
        assert_eq!(match_pattern(b"\x0b>\x0c<b", "s>s<a"), Some(4));
    }
}
