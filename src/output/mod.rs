//! Output formatting for helper results.
//!
//! - [`report`] - [`AddressReport`] rendered as text or JSON

mod report;

pub use report::AddressReport;
