//! Syntax checks for literal IPv4 and IPv6 addresses.
//!
//! Parsing works on the text alone; host names are never resolved.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::address::{Address, IPV4_WIDTH, IPV6_WIDTH};
use crate::CidrError;

/// Reads four dot-separated decimal components, each in `0..=255`.
fn parse_ipv4(text: &str) -> Option<[u8; IPV4_WIDTH]> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$")
            .expect("Not possible");
    }
    let caps = RE.captures(text)?;
    let mut octets = [0; IPV4_WIDTH];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps.get(i + 1)?.as_str().parse::<u8>().ok()?;
    }
    Some(octets)
}

/// Colon-hex scanner in the style of the classic `inet_pton`.
///
/// Groups accumulate hex digits until their value passes `0xffff`. One `::`
/// may appear and marks where the omitted zero groups go. A dotted IPv4 tail
/// ends the scan and fills four bytes.
fn parse_ipv6(text: &str) -> Option<[u8; IPV6_WIDTH]> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let mut pos = 0;
    // a leading colon only opens `::`
    if bytes[0] == b':' {
        if bytes[1] != b':' {
            return None;
        }
        pos = 1;
    }

    let mut octets = [0u8; IPV6_WIDTH];
    let mut len = 0;
    let mut gap: Option<usize> = None;
    let mut group_start = pos;
    let mut seen_digit = false;
    let mut value: u32 = 0;

    while pos < bytes.len() {
        let ch = bytes[pos];
        pos += 1;

        if let Some(digit) = char::from(ch).to_digit(16) {
            value = (value << 4) | digit;
            if value > 0xffff {
                return None;
            }
            seen_digit = true;
            continue;
        }

        match ch {
            b':' => {
                group_start = pos;
                if !seen_digit {
                    if gap.is_some() {
                        return None;
                    }
                    gap = Some(len);
                    continue;
                }
                if pos == bytes.len() || len + 2 > IPV6_WIDTH {
                    return None;
                }
                octets[len..len + 2].copy_from_slice(&(value as u16).to_be_bytes());
                len += 2;
                seen_digit = false;
                value = 0;
            }
            b'.' if len + IPV4_WIDTH <= IPV6_WIDTH => {
                let tail = parse_ipv4(&text[group_start..])?;
                octets[len..len + IPV4_WIDTH].copy_from_slice(&tail);
                len += IPV4_WIDTH;
                seen_digit = false;
                break;
            }
            _ => return None,
        }
    }

    if seen_digit {
        if len + 2 > IPV6_WIDTH {
            return None;
        }
        octets[len..len + 2].copy_from_slice(&(value as u16).to_be_bytes());
        len += 2;
    }

    if let Some(gap) = gap {
        // `::` has to stand for at least one group
        if len == IPV6_WIDTH {
            return None;
        }
        let tail = len - gap;
        octets.copy_within(gap..len, IPV6_WIDTH - tail);
        for byte in &mut octets[gap..IPV6_WIDTH - tail] {
            *byte = 0;
        }
        len = IPV6_WIDTH;
    }

    if len == IPV6_WIDTH {
        Some(octets)
    } else {
        None
    }
}

/// Parses a literal IPv4 or IPv6 address into its raw bytes.
///
/// IPv4 syntax is tried first, then IPv6. The family follows the literal:
/// an IPv4-mapped form such as `::ffff:10.0.0.1` stays a 16-byte IPv6
/// address with a prefix ceiling of 128. It is never narrowed to IPv4.
pub fn parse_address(text: &str) -> Result<Address, CidrError> {
    if text.is_empty() {
        trace!("rejected empty address");
        return Err(CidrError::EmptyAddress);
    }
    if let Some(octets) = parse_ipv4(text) {
        return Ok(Address::V4(octets));
    }
    match parse_ipv6(text) {
        Some(octets) => Ok(Address::V6(octets)),
        None => {
            trace!("rejected malformed address {:?}", text);
            Err(CidrError::MalformedAddress)
        }
    }
}

/// Checks that `text` is a literal IPv4 or IPv6 address.
pub fn validate_ip_address(text: &str) -> Result<(), CidrError> {
    parse_address(text).map(|_| ())
}
