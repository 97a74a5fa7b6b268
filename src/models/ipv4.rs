//! Dotted-quad IPv4 values.
//!
//! Provides [`DottedQuad`], the parsed form of an address or subnet mask
//! written as `a.b.c.d`. Every helper in the crate goes through
//! [`DottedQuad::parse`], so the shape and range checks live in one place.

use super::AddressError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Number of bits in an IPv4 address or mask.
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // ASCII digits only, `\d` would also match other unicode digits.
    static ref RE_DOTTED_QUAD: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex?");
}

/// Four octets of an IPv4 address or subnet mask.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct DottedQuad {
    octets: [u8; 4],
}

impl DottedQuad {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> DottedQuad {
        DottedQuad {
            octets: [a, b, c, d],
        }
    }

    /// Parse `a.b.c.d` where each group is 1-3 decimal digits with value <= 255.
    ///
    /// Leading zeros are accepted (`"010"` is 10). No whitespace is trimmed.
    ///
    /// # Examples
    /// ```
    /// use ipv4_helpers::models::DottedQuad;
    /// let q = DottedQuad::parse("192.168.001.10").unwrap();
    /// assert_eq!(q.to_string(), "192.168.1.10");
    /// assert!(DottedQuad::parse("192.168.1.256").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<DottedQuad, AddressError> {
        let caps = RE_DOTTED_QUAD.captures(input).ok_or_else(|| {
            log::trace!("parse({input:?}) shape mismatch");
            AddressError::InvalidAddressFormat {
                input: input.to_string(),
            }
        })?;

        let mut octets = [0u8; 4];
        for (position, octet) in octets.iter_mut().enumerate() {
            // Regex guarantees 1-3 ascii digits, so u16 never overflows.
            let value = caps[position + 1].parse::<u16>().map_err(|_| {
                AddressError::InvalidAddressFormat {
                    input: input.to_string(),
                }
            })?;
            *octet = u8::try_from(value).map_err(|_| AddressError::OctetOutOfRange {
                input: input.to_string(),
                position,
                value,
            })?;
        }
        log::trace!("parse({input:?}) -> {octets:?}");
        Ok(DottedQuad { octets })
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// The value as a big-endian 32-bit integer.
    pub fn to_bits(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }

    /// Count of `0` bits anywhere in the 32-bit value.
    pub fn zero_bits(&self) -> u32 {
        self.to_bits().count_zeros()
    }

    /// True when the value is a run of leading ones followed only by zeros.
    pub fn is_contiguous_mask(&self) -> bool {
        let bits = self.to_bits();
        bits.leading_ones() + bits.trailing_zeros() == MAX_LENGTH as u32
    }
}

impl FromStr for DottedQuad {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DottedQuad::parse(s)
    }
}

impl From<[u8; 4]> for DottedQuad {
    fn from(octets: [u8; 4]) -> Self {
        DottedQuad { octets }
    }
}

impl From<u32> for DottedQuad {
    fn from(bits: u32) -> Self {
        DottedQuad {
            octets: bits.to_be_bytes(),
        }
    }
}

impl From<Ipv4Addr> for DottedQuad {
    fn from(addr: Ipv4Addr) -> Self {
        DottedQuad {
            octets: addr.octets(),
        }
    }
}

impl From<DottedQuad> for Ipv4Addr {
    fn from(quad: DottedQuad) -> Self {
        Ipv4Addr::from(quad.octets)
    }
}

impl std::fmt::Display for DottedQuad {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.octets.iter().join("."))
    }
}

impl Serialize for DottedQuad {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DottedQuad {
    fn deserialize<D>(deserializer: D) -> Result<DottedQuad, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DottedQuad::parse(&s).map_err(de::Error::custom)
    }
}
