use std::net::IpAddr;

use ndm::utils::net;

#[test]
fn test_is_valid_ip_accepts_v4_and_v6() {
    assert!(net::is_valid_ip("192.168.1.10"));
    assert!(net::is_valid_ip("10.0.0.1"));
    assert!(net::is_valid_ip("::1"));
    assert!(net::is_valid_ip("fe80::1"));
}

#[test]
fn test_is_valid_ip_rejects_garbage() {
    assert!(!net::is_valid_ip(""));
    assert!(!net::is_valid_ip("192.168.1"));
    assert!(!net::is_valid_ip("192.168.1.256"));
    assert!(!net::is_valid_ip("core-router-1"));
}

#[test]
fn test_parse_cidr_v4() {
    let (addr, prefix) = net::parse_cidr("192.168.0.0/24").unwrap();
    assert_eq!(addr, "192.168.0.0".parse::<IpAddr>().unwrap());
    assert_eq!(prefix, 24);
}

#[test]
fn test_parse_cidr_boundaries() {
    assert!(net::parse_cidr("0.0.0.0/0").is_ok());
    assert!(net::parse_cidr("255.255.255.255/32").is_ok());
    assert!(net::parse_cidr("10.0.0.0/33").is_err());
}

#[test]
fn test_parse_cidr_requires_slash() {
    assert!(net::parse_cidr("10.0.0.0").is_err());
}

#[test]
fn test_resolve_ip_literal() {
    let ip = net::resolve_hostname("127.0.0.1").unwrap();
    assert_eq!(ip, "127.0.0.1".parse::<IpAddr>().unwrap());
}
