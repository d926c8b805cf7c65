//! Backend abstraction: where messages actually come from.
//!
//! The view layer never talks IMAP itself; it consumes a handful of fetch
//! primitives through [`MailSource`]. The bundled implementation is
//! [`imap::ImapSession`]; tests substitute in-memory stubs.

pub mod imap;

use crate::error::Result;
use crate::model::MessageHeader;

/// Opaque identifier for a message within an open folder session.
///
/// Carries the 1-based IMAP sequence number. Valid only while the owning
/// session stays open; an expunge can invalidate it at any time, which
/// surfaces as a stale-handle failure (or an absent lookup) on next use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle {
    seq: u32,
}

impl MessageHandle {
    /// Mint a handle for a 1-based sequence number.
    pub fn new(seq: u32) -> Self {
        Self { seq }
    }

    /// The 1-based sequence number within the folder.
    pub fn seq(&self) -> u32 {
        self.seq
    }
}

/// Fetch primitives provided by an underlying mail library or stub.
///
/// All calls are synchronous and may block on a network round-trip.
/// Implementations take `&self`; the bundled IMAP backend serializes its
/// session internally, and stubs use interior mutability for counters.
pub trait MailSource {
    /// Enumerate the folder's messages, in sequence order.
    fn list_messages(&self) -> Result<Vec<MessageHandle>>;

    /// Fetch the full header block, preserving server order.
    fn fetch_headers(&self, handle: MessageHandle) -> Result<Vec<MessageHeader>>;

    /// Fetch the message body as bytes.
    ///
    /// Fails with `UnsupportedContent` for multipart messages; callers
    /// wanting parts go to a MIME parser with the raw message instead.
    fn fetch_body(&self, handle: MessageHandle) -> Result<Vec<u8>>;

    /// Fetch the server-assigned UID for the message.
    fn fetch_uid(&self, handle: MessageHandle) -> Result<u32>;

    /// Probe one sequence number, `Ok(None)` when nothing is there.
    ///
    /// Out-of-range is a normal outcome here, never an error. The default
    /// goes through [`list_messages`](Self::list_messages); backends with a
    /// cheaper single-message probe should override.
    fn message_at(&self, seq: u32) -> Result<Option<MessageHandle>> {
        if seq == 0 {
            return Ok(None);
        }
        Ok(self.list_messages()?.into_iter().nth(seq as usize - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ThreeMessages;

    impl MailSource for ThreeMessages {
        fn list_messages(&self) -> Result<Vec<MessageHandle>> {
            Ok((1..=3).map(MessageHandle::new).collect())
        }
        fn fetch_headers(&self, _: MessageHandle) -> Result<Vec<MessageHeader>> {
            Ok(Vec::new())
        }
        fn fetch_body(&self, _: MessageHandle) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
        fn fetch_uid(&self, handle: MessageHandle) -> Result<u32> {
            Ok(handle.seq() * 100)
        }
    }

    #[test]
    fn test_default_message_at_is_one_based() {
        let source = ThreeMessages;
        assert_eq!(source.message_at(1).unwrap(), Some(MessageHandle::new(1)));
        assert_eq!(source.message_at(3).unwrap(), Some(MessageHandle::new(3)));
    }

    #[test]
    fn test_default_message_at_out_of_range() {
        let source = ThreeMessages;
        assert_eq!(source.message_at(0).unwrap(), None);
        assert_eq!(source.message_at(4).unwrap(), None);
        assert_eq!(source.message_at(99).unwrap(), None);
    }
}
