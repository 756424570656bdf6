//! Free-text fields (scenario and object names) inside links.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::positions::{OBJECT_DELIMITER, PROPERTY_DELIMITER};

/// Everything a browser's `encodeURI` escapes. Non-ASCII is always escaped.
const URI_ESCAPED: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Drop the record delimiters, then percent-encode the rest.
pub fn encode_string_safely(s: &str) -> String {
    let stripped: String = s
        .chars()
        .filter(|&c| c != OBJECT_DELIMITER && c != PROPERTY_DELIMITER)
        .collect();
    utf8_percent_encode(&stripped, URI_ESCAPED).to_string()
}

/// Undo the percent-encoding of a name. Malformed escapes are kept as text.
pub fn decode_text(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_delimiters() {
        assert_eq!(encode_string_safely("Foo;bar~Moo; foo~"), "FoobarMoo%20foo");
    }

    #[test]
    fn test_keeps_uri_reserved_characters() {
        assert_eq!(
            encode_string_safely("a,b/c?d:e@f&g=h+i$j-k_l.m!n*o'p(q)r#"),
            "a,b/c?d:e@f&g=h+i$j-k_l.m!n*o'p(q)r#"
        );
        assert_eq!(encode_string_safely("100% \"ok\""), "100%25%20%22ok%22");
        assert_eq!(encode_string_safely("Överflyg"), "%C3%96verflyg");
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text("Foo%20scenario"), "Foo scenario");
        assert_eq!(decode_text("Practice raygun + buddyspike"), "Practice raygun + buddyspike");
        assert_eq!(decode_text("100%"), "100%");
        assert_eq!(decode_text(&encode_string_safely("Överflyg 2")), "Överflyg 2");
    }
}
