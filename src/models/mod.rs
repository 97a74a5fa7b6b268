//! Value types shared by the helpers.
//!
//! - [`DottedQuad`] - parsed IPv4 address or subnet mask
//! - [`AddressError`] - why a string is not a valid dotted-quad

mod error;
mod ipv4;

// Re-export public types
pub use error::AddressError;
pub use ipv4::{DottedQuad, MAX_LENGTH};
