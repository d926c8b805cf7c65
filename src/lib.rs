//! imaplens — lazy, read-only message views over an open IMAP folder.
//!
//! The protocol work lives in the `imap`, `native-tls` and `mail-parser`
//! crates; this library adds the view layer on top: memoized per-message
//! fields ([`MessageView`]), explicit Present/Absent lookup results
//! ([`OptionalRef`]), and 1-based folder indexing that treats out-of-range
//! as a normal outcome ([`FolderIndex`]).
//!
//! ```no_run
//! use imaplens::{with_value, FolderIndex, ImapConfig};
//! use imaplens::source::imap::ImapSession;
//!
//! # fn main() -> imaplens::Result<()> {
//! let config = ImapConfig::load("imaplens.toml")?;
//! let session = ImapSession::connect(&config)?;
//! let inbox = FolderIndex::new(&session);
//!
//! with_value(inbox.get(1)?, |mut message| {
//!     if let Ok(sender) = message.sender() {
//!         println!("first message is from {sender}");
//!     }
//! });
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod folder;
pub mod lazy;
pub mod model;
pub mod optional;
pub mod parser;
pub mod source;
pub mod view;

pub use config::ImapConfig;
pub use error::{LensError, Result};
pub use folder::FolderIndex;
pub use lazy::LazyField;
pub use model::{EmailAddress, MessageHeader};
pub use optional::{with_value, OptionalRef};
pub use source::{MailSource, MessageHandle};
pub use view::MessageView;
