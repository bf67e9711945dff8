use cidr_range::{parse_cidr, validate_ip_address, CidrError};

#[test]
fn documented_ranges() {
    let inputs = [
        ("10.77.12.11/18", "10.77.0.0", "10.77.63.255"),
        ("192.168.1.2/24", "192.168.1.0", "192.168.1.255"),
        ("435:23f::45:23/101", "435:23f:0:0:0:0:0:0", "435:23f:0:0:0:0:7ff:ffff"),
        ("::ffff:10.0.0.1/120", "0:0:0:0:0:ffff:a00:0", "0:0:0:0:0:ffff:a00:ff"),
    ];
    for (text, network, broadcast) in inputs.iter() {
        let cidr = match parse_cidr(text) {
            Ok(cidr) => cidr,
            Err(error) => panic!("Should parse '{}' but got error={}", text, error),
        };
        assert_eq!(*network, cidr.network_address(), "network of {}", text);
        assert_eq!(*broadcast, cidr.broadcast_address(), "broadcast of {}", text);
    }
}

#[test]
fn in_range_v4() {
    let cidr = parse_cidr("192.168.1.2/24").unwrap();
    assert_eq!(Ok(true), cidr.is_in_range("192.168.1.22"));
    assert_eq!(Ok(true), cidr.is_in_range("192.168.1.255"));
    assert_eq!(Ok(true), cidr.is_in_hosts_range("192.168.1.254"));
    assert_eq!(Ok(false), cidr.is_in_hosts_range("192.168.1.255"));
    assert_eq!(Err(CidrError::EmptyAddress), cidr.is_in_range(""));
    assert_eq!(Err(CidrError::EmptyAddress), cidr.is_in_hosts_range(""));
}

#[test]
fn in_range_v6() {
    let cidr = parse_cidr("435:23f::45:23/101").unwrap();
    assert_eq!(Ok(true), cidr.is_in_range("435:23f:0:0:0:0:0:1"));
    assert_eq!(Ok(true), cidr.is_in_range("435:23f:0:0:0:0:7ff:ffff"));
    assert_eq!(Ok(true), cidr.is_in_hosts_range("435:23f:0:0:0:0:7ff:fffe"));
    assert_eq!(Ok(false), cidr.is_in_hosts_range("435:23f:0:0:0:0:7ff:ffff"));
    assert_eq!(Ok(false), cidr.is_in_range("435:23f:0:0:0:0:800:0"));
}

#[test]
fn should_not_parse_cidr() {
    let inputs = [
        ("", CidrError::MissingSlash),
        ("/", CidrError::EmptyAddress),
        ("/1", CidrError::EmptyAddress),
        ("example.com/24", CidrError::MalformedAddress),
        ("192.168.1.0/0", CidrError::InvalidPrefix),
        ("192.168.1.0/33", CidrError::InvalidPrefix),
        ("::1/129", CidrError::InvalidPrefix),
        ("::1/abc", CidrError::InvalidPrefix),
    ];
    for (text, expected_error) in inputs.iter() {
        let error = parse_cidr(text).expect_err("should fail");
        assert_eq!(*expected_error, error, "parsing '{}'", text);
    }
}

#[test]
fn validate_addresses() {
    assert_eq!(Ok(()), validate_ip_address("::192.168.1.1"));
    assert_eq!(Ok(()), validate_ip_address("::1"));
    let invalid = [
        "1200::AB00:1234::2552:7777:1313",
        ":2001:db8:0:1",
        "2001:db8:0:1",
        "12001:0000:1234:0000:0000:C1C0:ABCD:0876",
    ];
    for text in invalid.iter() {
        assert_eq!(Err(CidrError::MalformedAddress), validate_ip_address(text), "{}", text);
    }
}
