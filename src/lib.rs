//! Small IPv4 helpers: validate a dotted-quad address, compute a network
//! address from an address and mask, and count usable hosts for a mask.

pub mod models;
pub mod output;
pub mod processing;

pub use models::{AddressError, DottedQuad};
pub use processing::{get_addresses_count, get_network_address, is_ip_valid};
