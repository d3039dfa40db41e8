use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Every byte except the unreserved marks `- _ . ! ~ * ' ( )` and alphanumerics is escaped, the
/// same set browsers escape for a single URI component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `value` so it can be embedded as a single query parameter value.
pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::encode_component;

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            "https%3A%2F%2Fexample.org%2Fa%3Fb%3Dc%26d",
            encode_component("https://example.org/a?b=c&d")
        );
    }

    #[test]
    fn spaces_and_newlines_are_escaped() {
        assert_eq!("a%20b%0A%0Ac", encode_component("a b\n\nc"));
    }

    #[test]
    fn unreserved_marks_are_kept() {
        assert_eq!("it's-(fine)_ok.!~*", encode_component("it's-(fine)_ok.!~*"));
    }

    #[test]
    fn multibyte_characters_are_utf8_escaped() {
        assert_eq!("%E2%98%85", encode_component("★"));
    }
}
