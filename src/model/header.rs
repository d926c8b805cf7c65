//! Message header pairs.

/// A single message header.
///
/// Plain name/value data with value equality only. Header sequences keep
/// the order the server returned them in; duplicates are allowed
/// (`Received:` chains and the like).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessageHeader {
    /// Header name with its original case (e.g. `Message-ID`).
    pub name: String,
    /// Raw header value, unfolded but otherwise untouched.
    pub value: String,
}

impl MessageHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Find the first header with the given name (case-insensitive).
///
/// A linear scan: header sequences are short and read rarely after first
/// materialization, so no name index is built.
pub fn find_header<'a>(headers: &'a [MessageHeader], name: &str) -> Option<&'a MessageHeader> {
    headers.iter().find(|h| h.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_header_case_insensitive() {
        let headers = vec![
            MessageHeader::new("Subject", "Hi"),
            MessageHeader::new("From", "a@x.com"),
        ];
        let found = find_header(&headers, "from").expect("should find From");
        assert_eq!(found.value, "a@x.com");
    }

    #[test]
    fn test_find_header_first_of_duplicates() {
        let headers = vec![
            MessageHeader::new("Received", "from a"),
            MessageHeader::new("Received", "from b"),
        ];
        assert_eq!(find_header(&headers, "Received").unwrap().value, "from a");
    }

    #[test]
    fn test_find_header_missing() {
        let headers = vec![MessageHeader::new("Subject", "Hi")];
        assert!(find_header(&headers, "Date").is_none());
    }
}
