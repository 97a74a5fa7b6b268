//! Integration tests for ipv4-helpers
//!
//! These tests exercise the public API the way a caller would.

use ipv4_helpers::{
    get_addresses_count, get_network_address, is_ip_valid, models::DottedQuad,
    output::AddressReport, AddressError,
};

#[test]
fn test_validate_then_compute() {
    let ip = "192.168.1.10";
    let mask = "255.255.255.0";
    assert!(is_ip_valid(ip));
    assert!(is_ip_valid(mask));

    assert_eq!(get_network_address(ip, mask).unwrap(), "192.168.1.0");
    assert_eq!(get_addresses_count(mask).unwrap(), 254);
}

#[test]
fn test_known_host_counts() {
    let cases = [
        ("255.255.255.255", 1),
        ("255.255.255.254", 2),
        ("255.255.255.0", 254),
        ("255.255.0.0", 65534),
        ("0.0.0.0", 4_294_967_294),
    ];
    for (mask, expected) in cases {
        assert_eq!(get_addresses_count(mask).unwrap(), expected, "mask {mask}");
    }
}

#[test]
fn test_invalid_input_rejected_everywhere() {
    for bad in ["1.2.3", "1.2.3.256", "a.b.c.d", "1.2.3.4.5", ""] {
        assert!(!is_ip_valid(bad), "{bad:?} should be invalid");
        assert!(get_network_address(bad, "255.0.0.0").is_err(), "{bad:?}");
        assert!(get_network_address("10.0.0.1", bad).is_err(), "{bad:?}");
        assert!(get_addresses_count(bad).is_err(), "{bad:?}");
    }
}

#[test]
fn test_error_reports_input() {
    let err = get_network_address("10.0.0.1", "255.255.0.999").unwrap_err();
    assert_eq!(err.input(), "255.255.0.999");
    assert!(matches!(err, AddressError::OctetOutOfRange { value: 999, .. }));
}

#[test]
fn test_network_address_is_idempotent() {
    let addresses = ["10.5.5.5", "172.31.255.1", "8.8.4.4", "0.0.0.0"];
    let masks = ["255.0.0.0", "255.255.252.0", "255.255.255.255", "0.255.0.255"];
    for ip in addresses {
        for mask in masks {
            let once = get_network_address(ip, mask).unwrap();
            assert!(is_ip_valid(&once));
            assert_eq!(get_network_address(&once, mask).unwrap(), once);
        }
    }
}

#[test]
fn test_report_json_round_trip_fields() {
    let report = AddressReport::new("10.5.5.5", Some("255.0.0.0")).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["network"], "10.0.0.0");
    assert_eq!(json["host_count"], 16_777_214u64);

    let network: DottedQuad = serde_json::from_value(json["network"].clone()).unwrap();
    assert_eq!(network, DottedQuad::new(10, 0, 0, 0));
}
