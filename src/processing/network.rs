//! IPv4 arithmetic helpers.
//!
//! The string functions ([`is_ip_valid`], [`get_network_address`],
//! [`get_addresses_count`]) parse their input and fail fast on malformed
//! strings. The typed functions ([`network_address`], [`addresses_count`])
//! work on an already parsed [`DottedQuad`] and cannot fail.

use crate::models::{AddressError, DottedQuad};

/// True if `ip` is four dot-separated groups of 1-3 digits, each <= 255.
///
/// # Examples
/// ```
/// use ipv4_helpers::processing::is_ip_valid;
/// assert!(is_ip_valid("192.168.1.10"));
/// assert!(!is_ip_valid("192.168.1.256"));
/// ```
pub fn is_ip_valid(ip: &str) -> bool {
    match DottedQuad::parse(ip) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("is_ip_valid: {e}");
            false
        }
    }
}

/// Network address of `addr` under `mask` (octet-wise AND).
pub fn network_address(addr: DottedQuad, mask: DottedQuad) -> DottedQuad {
    DottedQuad::from(addr.to_bits() & mask.to_bits())
}

/// Network address of `ip` under `mask`, as a dotted-quad string.
///
/// # Examples
/// ```
/// use ipv4_helpers::processing::get_network_address;
/// assert_eq!(get_network_address("10.5.5.5", "255.0.0.0").unwrap(), "10.0.0.0");
/// assert!(get_network_address("10.5.5", "255.0.0.0").is_err());
/// ```
pub fn get_network_address(ip: &str, mask: &str) -> Result<String, AddressError> {
    let addr = DottedQuad::parse(ip)?;
    let mask = DottedQuad::parse(mask)?;
    let network = network_address(addr, mask);
    log::debug!("get_network_address({addr}, {mask}) -> {network}");
    Ok(network.to_string())
}

/// Usable host addresses for `mask`.
///
/// Zero bits are counted wherever they sit, so non-contiguous masks are
/// counted like a contiguous mask with the same number of zeros.
/// - 0 zero bits (/32): 1
/// - 1 zero bit (/31, point-to-point): 2
/// - otherwise: 2^zeros - 2 (minus network and broadcast)
pub fn addresses_count(mask: DottedQuad) -> u64 {
    match mask.zero_bits() {
        0 => 1,
        1 => 2,
        zeros => (1u64 << zeros) - 2,
    }
}

/// Usable host addresses for a dotted-quad `mask` string.
///
/// # Examples
/// ```
/// use ipv4_helpers::processing::get_addresses_count;
/// assert_eq!(get_addresses_count("255.255.255.0").unwrap(), 254);
/// ```
pub fn get_addresses_count(mask: &str) -> Result<u64, AddressError> {
    let mask = DottedQuad::parse(mask)?;
    let count = addresses_count(mask);
    log::debug!("get_addresses_count({mask}) -> {count}");
    Ok(count)
}
