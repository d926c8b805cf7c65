//! RFC 5322 header unfolding.
//!
//! Turns a raw `RFC822.HEADER` block into an ordered header sequence.
//! Names keep their original case and values are unfolded but not decoded
//! further; RFC 2047 encoded-words are the caller's business.

use crate::model::MessageHeader;

/// Unfold a raw header block into ordered name/value pairs.
///
/// Continuation lines (leading space or tab) are joined to the previous
/// header with a single space. Order and duplicates are preserved exactly
/// as the server sent them.
pub fn unfold_headers(raw: &[u8]) -> Vec<MessageHeader> {
    let text = decode_header_bytes(raw);
    let mut result: Vec<MessageHeader> = Vec::new();

    for line in text.lines() {
        if line.starts_with(' ') || line.starts_with('\t') {
            // Continuation line
            if let Some(last) = result.last_mut() {
                last.value.push(' ');
                last.value.push_str(line.trim());
            }
        } else if let Some(colon_pos) = line.find(':') {
            result.push(MessageHeader::new(
                line[..colon_pos].trim(),
                line[colon_pos + 1..].trim(),
            ));
        }
        // Lines with no colon that are not continuations are silently skipped
    }

    result
}

/// Decode raw header bytes to a string.
///
/// Tries UTF-8 first, then falls back to Windows-1252 (which accepts every
/// byte). A leading BOM is stripped.
fn decode_header_bytes(bytes: &[u8]) -> String {
    let bytes = if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &bytes[3..]
    } else {
        bytes
    };

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfold_simple_headers() {
        let raw = b"Subject: Hi\r\nFrom: a@x.com\r\n\r\n";
        let headers = unfold_headers(raw);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].name, "Subject");
        assert_eq!(headers[0].value, "Hi");
        assert_eq!(headers[1].name, "From");
        assert_eq!(headers[1].value, "a@x.com");
    }

    #[test]
    fn test_unfold_continuation_line() {
        let raw = b"Subject: This is a long\r\n\tsubject line\r\nFrom: user@example.com\r\n";
        let headers = unfold_headers(raw);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].value, "This is a long subject line");
    }

    #[test]
    fn test_name_case_preserved() {
        let headers = unfold_headers(b"Message-ID: <m1@example.com>\r\n");
        assert_eq!(headers[0].name, "Message-ID");
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let raw = b"Received: from a\r\nReceived: from b\r\nSubject: x\r\n";
        let headers = unfold_headers(raw);
        assert_eq!(headers[0].value, "from a");
        assert_eq!(headers[1].value, "from b");
        assert_eq!(headers[2].name, "Subject");
    }

    #[test]
    fn test_non_utf8_falls_back_to_windows1252() {
        // "Caf<E9>" in Windows-1252
        let raw = b"Subject: Caf\xe9\r\n";
        let headers = unfold_headers(raw);
        assert_eq!(headers[0].value, "Café");
    }

    #[test]
    fn test_garbage_lines_skipped() {
        let raw = b"this line has no colon\r\nSubject: ok\r\n";
        let headers = unfold_headers(raw);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].name, "Subject");
    }
}
