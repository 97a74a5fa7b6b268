//! Summary of an address (and optional mask) for printing.

use crate::models::{AddressError, DottedQuad};
use crate::processing::{addresses_count, is_ip_valid, network_address};
use colored::Colorize;
use serde::Serialize;

/// Results of running the helpers over one address and an optional mask.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressReport {
    /// Address exactly as given.
    pub address: String,
    /// Result of [`is_ip_valid`] on `address`.
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<DottedQuad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<DottedQuad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contiguous_mask: Option<bool>,
}

impl AddressReport {
    /// Build a report. Without a mask only validity is reported and this never fails.
    /// With a mask both strings must parse.
    pub fn new(address: &str, mask: Option<&str>) -> Result<AddressReport, AddressError> {
        let mut report = AddressReport {
            address: address.to_string(),
            valid: is_ip_valid(address),
            mask: None,
            network: None,
            host_count: None,
            contiguous_mask: None,
        };
        if let Some(mask) = mask {
            let addr = DottedQuad::parse(address)?;
            let mask = DottedQuad::parse(mask)?;
            report.mask = Some(mask);
            report.network = Some(network_address(addr, mask));
            report.host_count = Some(addresses_count(mask));
            report.contiguous_mask = Some(mask.is_contiguous_mask());
        }
        Ok(report)
    }

    /// Multi-line, coloured text for a terminal.
    pub fn render_text(&self) -> String {
        let valid = if self.valid {
            "valid".green()
        } else {
            "invalid".red()
        };
        let mut lines = vec![format_line("address", format!("{} ({valid})", self.address))];
        if let Some(mask) = self.mask {
            let mask = match self.contiguous_mask {
                Some(false) => format!("{mask} ({})", "non-contiguous".yellow()),
                _ => mask.to_string(),
            };
            lines.push(format_line("mask", mask));
        }
        if let Some(network) = self.network {
            lines.push(format_line("network", network));
        }
        if let Some(count) = self.host_count {
            lines.push(format_line("hosts", count));
        }
        lines.join("\n")
    }
}

/// Right-aligned label followed by its value.
fn format_line<T: ToString>(label: &str, value: T) -> String {
    format!("{:>8}: {}", label, value.to_string())
}
