//! 1-based folder indexing.

use tracing::debug;

use crate::error::Result;
use crate::optional::OptionalRef;
use crate::source::MailSource;
use crate::view::MessageView;

/// A stateless lookup view over an open folder.
///
/// Holds only a borrow of the source; the caller keeps the session open
/// for the index's lifetime. Every call is an independent lookup — no
/// enumeration is cached, so concurrent expunges simply surface as
/// `Absent` on later lookups.
pub struct FolderIndex<'s, S: MailSource + ?Sized> {
    source: &'s S,
}

impl<'s, S: MailSource + ?Sized> FolderIndex<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self { source }
    }

    /// Look up the message at a 1-based sequence number.
    ///
    /// `Absent` when nothing is there — including index 0 and positions
    /// invalidated between enumeration and lookup. That is an expected
    /// outcome, not an error; every other source failure propagates
    /// unchanged.
    pub fn get(&self, seq: u32) -> Result<OptionalRef<MessageView<'s, S>>> {
        match self.source.message_at(seq)? {
            Some(handle) => Ok(OptionalRef::Present(MessageView::new(self.source, handle))),
            None => {
                debug!(seq, "Lookup found no message");
                Ok(OptionalRef::Absent)
            }
        }
    }

    /// A view for every message currently in the folder, in sequence order.
    pub fn messages(&self) -> Result<Vec<MessageView<'s, S>>> {
        Ok(self
            .source
            .list_messages()?
            .into_iter()
            .map(|handle| MessageView::new(self.source, handle))
            .collect())
    }
}
