//! Lazily materialized per-message views.

use crate::error::{LensError, Result};
use crate::lazy::LazyField;
use crate::model::header::find_header;
use crate::model::{EmailAddress, MessageHeader};
use crate::source::{MailSource, MessageHandle};

/// A read-only view of one message, with memoized fields.
///
/// Each accessor fetches from the source on first touch and answers from
/// its cache afterwards; a failed fetch leaves the field unset so the next
/// access retries. The view holds no network resource of its own — the
/// source owns the live session — so discarding one at any time loses only
/// the cache, never correctness. Views are not reused across reconnects.
pub struct MessageView<'s, S: MailSource + ?Sized> {
    source: &'s S,
    handle: MessageHandle,
    sender: LazyField<EmailAddress>,
    body: LazyField<Vec<u8>>,
    uid: LazyField<u32>,
    headers: LazyField<Vec<MessageHeader>>,
}

impl<'s, S: MailSource + ?Sized> MessageView<'s, S> {
    /// Wrap a handle minted by `source`.
    pub fn new(source: &'s S, handle: MessageHandle) -> Self {
        Self {
            source,
            handle,
            sender: LazyField::new(),
            body: LazyField::new(),
            uid: LazyField::new(),
            headers: LazyField::new(),
        }
    }

    /// The underlying handle.
    pub fn handle(&self) -> MessageHandle {
        self.handle
    }

    /// First address of the `From:` header.
    ///
    /// Fails with [`LensError::MalformedMessage`] when the address list is
    /// empty. Materializes through its own header fetch, independent of
    /// [`headers`](Self::headers).
    pub fn sender(&mut self) -> Result<&EmailAddress> {
        let source = self.source;
        let handle = self.handle;
        self.sender.get(|| {
            let headers = source.fetch_headers(handle)?;
            let raw = find_header(&headers, "From")
                .map(|h| h.value.as_str())
                .unwrap_or("");
            let mut addresses = EmailAddress::parse_list(raw);
            if addresses.is_empty() {
                return Err(LensError::MalformedMessage(format!(
                    "message {} has an empty From address list",
                    handle.seq()
                )));
            }
            Ok(addresses.remove(0))
        })
    }

    /// The message body as bytes, for non-multipart content only.
    ///
    /// Multipart messages fail with [`LensError::UnsupportedContent`];
    /// take the raw message to a MIME parser instead.
    pub fn body_text(&mut self) -> Result<&[u8]> {
        let source = self.source;
        let handle = self.handle;
        Ok(self.body.get(|| source.fetch_body(handle))?.as_slice())
    }

    /// The server-assigned UID.
    ///
    /// Stable for the lifetime of the session; servers may renumber across
    /// reconnects.
    pub fn uid(&mut self) -> Result<u32> {
        let source = self.source;
        let handle = self.handle;
        Ok(*self.uid.get(|| source.fetch_uid(handle))?)
    }

    /// The full header sequence, in server order.
    pub fn headers(&mut self) -> Result<&[MessageHeader]> {
        let source = self.source;
        let handle = self.handle;
        Ok(self.headers.get(|| source.fetch_headers(handle))?.as_slice())
    }

    /// First header with the given name (case-insensitive linear scan).
    pub fn header(&mut self, name: &str) -> Result<Option<&MessageHeader>> {
        Ok(find_header(self.headers()?, name))
    }

    /// Whether the message's `Content-Type` is `multipart/*`.
    ///
    /// Reads through the cached header sequence; messages without a
    /// `Content-Type` header count as non-multipart.
    pub fn is_multipart(&mut self) -> Result<bool> {
        Ok(self
            .header("Content-Type")?
            .map(|h| {
                h.value
                    .trim_start()
                    .to_ascii_lowercase()
                    .starts_with("multipart/")
            })
            .unwrap_or(false))
    }
}
