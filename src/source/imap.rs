//! Bundled IMAP backend over the `imap` and `native-tls` crates.

use std::net::TcpStream;
use std::sync::{Mutex, MutexGuard};

use imap::Session;
use mail_parser::{MessageParser, MimeHeaders, PartType};
use native_tls::{TlsConnector, TlsStream};
use tracing::debug;

use crate::config::ImapConfig;
use crate::error::{LensError, Result};
use crate::model::MessageHeader;
use crate::parser::header::unfold_headers;
use crate::source::{MailSource, MessageHandle};

/// A logged-in IMAP session with one folder selected.
///
/// Implements [`MailSource`] by issuing one FETCH per primitive. The
/// underlying session is guarded by a mutex because the trait takes
/// `&self`; every view derived from this session shares the same
/// connection. Dropping the session closes the connection and invalidates
/// every handle minted from it.
pub struct ImapSession {
    session: Mutex<Session<TlsStream<TcpStream>>>,
    folder: String,
}

impl ImapSession {
    /// Connect over TLS, log in, and select the configured folder.
    pub fn connect(config: &ImapConfig) -> Result<Self> {
        let tls = TlsConnector::builder().build()?;
        let client = imap::connect((config.host.as_str(), config.port), &config.host, &tls)?;
        let mut session = client
            .login(&config.username, &config.password)
            .map_err(|(err, _client)| LensError::Transport(err))?;

        let mailbox = session.select(&config.folder)?;
        debug!(
            folder = %config.folder,
            exists = mailbox.exists,
            "Selected folder"
        );

        Ok(Self {
            session: Mutex::new(session),
            folder: config.folder.clone(),
        })
    }

    /// The selected folder name.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    fn lock(&self) -> MutexGuard<'_, Session<TlsStream<TcpStream>>> {
        // A poisoned lock only means another thread panicked mid-fetch;
        // the session itself is still usable for the next command.
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MailSource for ImapSession {
    fn list_messages(&self) -> Result<Vec<MessageHandle>> {
        let mut session = self.lock();
        // Re-select to pick up a fresh message count; sequence numbers are
        // 1..=EXISTS by definition.
        let mailbox = session.select(&self.folder)?;
        debug!(folder = %self.folder, exists = mailbox.exists, "Enumerated folder");
        Ok((1..=mailbox.exists).map(MessageHandle::new).collect())
    }

    fn fetch_headers(&self, handle: MessageHandle) -> Result<Vec<MessageHeader>> {
        let seq = handle.seq();
        debug!(seq, "Fetching headers");
        let mut session = self.lock();
        let fetches = session.fetch(seq.to_string(), "RFC822.HEADER")?;
        let fetch = fetches.first().ok_or(LensError::StaleHandle { seq })?;
        let raw = fetch.header().ok_or_else(|| {
            LensError::MalformedMessage(format!("server returned no header block for message {seq}"))
        })?;
        Ok(unfold_headers(raw))
    }

    fn fetch_body(&self, handle: MessageHandle) -> Result<Vec<u8>> {
        let seq = handle.seq();
        debug!(seq, "Fetching body");
        let raw = {
            let mut session = self.lock();
            let fetches = session.fetch(seq.to_string(), "RFC822")?;
            let fetch = fetches.first().ok_or(LensError::StaleHandle { seq })?;
            fetch
                .body()
                .ok_or_else(|| {
                    LensError::MalformedMessage(format!(
                        "server returned no body section for message {seq}"
                    ))
                })?
                .to_vec()
        };

        let parsed = MessageParser::default().parse(&raw).ok_or_else(|| {
            LensError::MalformedMessage(format!("message {seq} could not be parsed"))
        })?;
        let root = parsed.part(0).ok_or_else(|| {
            LensError::MalformedMessage(format!("message {seq} has no content"))
        })?;

        if matches!(root.body, PartType::Multipart(_)) {
            let content_type = root
                .content_type()
                .map(|ct| match ct.subtype() {
                    Some(sub) => format!("{}/{}", ct.ctype(), sub),
                    None => ct.ctype().to_string(),
                })
                .unwrap_or_else(|| "multipart".to_string());
            return Err(LensError::UnsupportedContent(content_type));
        }

        Ok(root.contents().to_vec())
    }

    fn fetch_uid(&self, handle: MessageHandle) -> Result<u32> {
        let seq = handle.seq();
        debug!(seq, "Fetching UID");
        let mut session = self.lock();
        let fetches = session.fetch(seq.to_string(), "UID")?;
        let fetch = fetches.first().ok_or(LensError::StaleHandle { seq })?;
        fetch.uid.ok_or(LensError::MissingUid { seq })
    }

    fn message_at(&self, seq: u32) -> Result<Option<MessageHandle>> {
        if seq == 0 {
            return Ok(None);
        }
        let mut session = self.lock();
        match session.fetch(seq.to_string(), "UID") {
            Ok(fetches) if fetches.is_empty() => {
                debug!(seq, "No message at index");
                Ok(None)
            }
            Ok(_) => Ok(Some(MessageHandle::new(seq))),
            // Some servers answer NO/BAD instead of an empty response for
            // sequence numbers outside the folder.
            Err(imap::Error::No(reason)) | Err(imap::Error::Bad(reason)) => {
                debug!(seq, reason = %reason, "Server rejected index probe");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}
