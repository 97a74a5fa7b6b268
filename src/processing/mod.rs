//! IPv4 arithmetic.
//!
//! - [`network`] - validation, network address, usable host count

mod network;

// Re-export public functions
pub use network::{
    addresses_count, get_addresses_count, get_network_address, is_ip_valid, network_address,
};
