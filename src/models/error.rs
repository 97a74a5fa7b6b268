//! Errors raised while parsing dotted-quad strings.

use thiserror::Error;

/// Reason a string could not be turned into a [`super::DottedQuad`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Not four dot-separated groups of 1-3 decimal digits.
    #[error("Invalid address format: {input:?}")]
    InvalidAddressFormat { input: String },
    /// Shape is fine but one octet does not fit in 8 bits.
    #[error("Octet {position} of {input:?} is out of range: {value} > 255")]
    OctetOutOfRange {
        input: String,
        position: usize,
        value: u16,
    },
}

impl AddressError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            AddressError::InvalidAddressFormat { input } => input,
            AddressError::OctetOutOfRange { input, .. } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressError::InvalidAddressFormat {
            input: "1.2.3".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid address format: \"1.2.3\"");

        let err = AddressError::OctetOutOfRange {
            input: "1.2.300.4".to_string(),
            position: 2,
            value: 300,
        };
        assert_eq!(
            err.to_string(),
            "Octet 2 of \"1.2.300.4\" is out of range: 300 > 255"
        );
        assert_eq!(err.input(), "1.2.300.4");
    }
}
