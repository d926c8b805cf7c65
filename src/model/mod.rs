//! Data types: message headers and email addresses.

pub mod address;
pub mod header;

pub use address::EmailAddress;
pub use header::MessageHeader;
