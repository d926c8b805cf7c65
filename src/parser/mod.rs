//! Header-block parsing for fetched messages.

pub mod header;
