//! Chord text: storage keys and single-character decoding
//!
//! Chords are stored exactly as written in configuration (`"^A"`, `"ENTER"`,
//! `"g"`). Decoding turns the simple forms into the character the terminal
//! delivers for them.

/// Storage key used for an empty chord; no real key produces this text
pub const NIL_CHORD: &str = "NIL";

/// Key under which a chord is looked up
#[inline]
pub fn lookup_key(chord: &str) -> &str {
    if chord.is_empty() {
        NIL_CHORD
    } else {
        chord
    }
}

/// Translate a chord into the character it produces
///
/// - `"ENTER"` is a line feed, `"ESC"` is 27
/// - `"^X"` is the control character `X - '@'` for `X` in `@..=_`, and `"^?"` is DEL
/// - a single printable character is itself
///
/// Anything else (named keys such as `"UP"`, multi-character text, lowercase
/// control forms) has no single-character form and yields `None`.
pub fn decode_chord(chord: &str) -> Option<char> {
    match chord {
        "ENTER" => return Some('\n'),
        "ESC" => return Some('\x1b'),
        _ => {}
    }

    let mut chars = chord.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('^'), Some('?'), None) => Some('\x7f'),
        (Some('^'), Some(c @ '@'..='_'), None) => Some(char::from(c as u8 - b'@')),
        (Some(c), None, None) if !c.is_control() => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named_keys() {
        assert_eq!(decode_chord("ENTER"), Some('\n'));
        assert_eq!(decode_chord("ESC"), Some('\x1b'));
    }

    #[test]
    fn test_decode_control_keys() {
        assert_eq!(decode_chord("^A"), Some('\u{1}'));
        assert_eq!(decode_chord("^Z"), Some('\u{1a}'));
        assert_eq!(decode_chord("^@"), Some('\0'));
        assert_eq!(decode_chord("^["), Some('\x1b'));
        assert_eq!(decode_chord("^?"), Some('\x7f'));
    }

    #[test]
    fn test_decode_printable() {
        assert_eq!(decode_chord("x"), Some('x'));
        assert_eq!(decode_chord("^"), Some('^'));
        assert_eq!(decode_chord("ä"), Some('ä'));
    }

    #[test]
    fn test_decode_unrecognized() {
        assert_eq!(decode_chord(""), None);
        assert_eq!(decode_chord("UP"), None);
        assert_eq!(decode_chord("^a"), None);
        assert_eq!(decode_chord("^AB"), None);
        assert_eq!(decode_chord("\t"), None);
    }

    #[test]
    fn test_lookup_key() {
        assert_eq!(lookup_key(""), NIL_CHORD);
        assert_eq!(lookup_key("q"), "q");
    }
}
