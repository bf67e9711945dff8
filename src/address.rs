use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::validator;
use crate::CidrError;

pub(crate) const IPV4_WIDTH: usize = 4;
pub(crate) const IPV6_WIDTH: usize = 16;

/// Address family, fixed by the byte length of a parsed literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub fn width(self) -> usize {
        match self {
            Family::V4 => IPV4_WIDTH,
            Family::V6 => IPV6_WIDTH,
        }
    }

    pub fn bits(self) -> u32 {
        self.width() as u32 * 8
    }

    pub fn max_prefix(self) -> u8 {
        self.bits() as u8
    }
}

/// A literal IP address held as its raw big-endian bytes.
///
/// Ordering is by unsigned integer value first, so an IPv4 address sorts
/// among IPv6 addresses by what it would be zero-extended. Numerically equal
/// addresses of different families order IPv4 first and are not equal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Address {
    V4([u8; IPV4_WIDTH]),
    V6([u8; IPV6_WIDTH]),
}

impl Address {
    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        self.family() == Family::V4
    }

    pub fn is_ipv6(&self) -> bool {
        self.family() == Family::V6
    }

    pub fn octets(&self) -> &[u8] {
        match self {
            Address::V4(octets) => octets,
            Address::V6(octets) => octets,
        }
    }

    fn zero(family: Family) -> Self {
        match family {
            Family::V4 => Address::V4([0; IPV4_WIDTH]),
            Family::V6 => Address::V6([0; IPV6_WIDTH]),
        }
    }

    fn octets_mut(&mut self) -> &mut [u8] {
        match self {
            Address::V4(octets) => octets,
            Address::V6(octets) => octets,
        }
    }

    /// Value zero-extended on the left to the IPv6 width.
    fn widened(&self) -> [u8; IPV6_WIDTH] {
        let mut wide = [0; IPV6_WIDTH];
        let octets = self.octets();
        wide[IPV6_WIDTH - octets.len()..].copy_from_slice(octets);
        wide
    }

    /// Unsigned big-endian comparison of the two values, ignoring family.
    pub fn cmp_value(&self, other: &Address) -> Ordering {
        self.widened().cmp(&other.widened())
    }

    /// Bit pattern whose highest `prefix` bits are 0 and whose remaining
    /// low bits are 1.
    ///
    /// `prefix` beyond the family width yields an all-zero mask.
    pub fn host_mask(family: Family, prefix: u8) -> Self {
        let mut mask = Address::zero(family);
        let mut network_bits = u32::from(prefix);
        for byte in mask.octets_mut() {
            *byte = match network_bits {
                0 => 0xff,
                1..=7 => 0xff >> network_bits,
                _ => 0,
            };
            network_bits = network_bits.saturating_sub(8);
        }
        mask
    }

    fn combine(&self, mask: &Address, op: impl Fn(u8, u8) -> u8) -> Self {
        let mut out = *self;
        for (byte, m) in out.octets_mut().iter_mut().zip(mask.octets()) {
            *byte = op(*byte, *m);
        }
        out
    }

    /// Clears every bit below `prefix`: the first address of the block.
    pub fn network(&self, prefix: u8) -> Self {
        let mask = Address::host_mask(self.family(), prefix);
        self.combine(&mask, |b, m| b & !m)
    }

    /// Sets every bit below `prefix`: the last address of the block.
    pub fn broadcast(&self, prefix: u8) -> Self {
        let mask = Address::host_mask(self.family(), prefix);
        self.network(prefix).combine(&mask, |b, m| b | m)
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
            .then_with(|| self.family().cmp(&other.family()))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            Address::V4([a, b, c, d]) => write!(f, "{}.{}.{}.{}", a, b, c, d),
            Address::V6(octets) => {
                for (i, pair) in octets.chunks(2).enumerate() {
                    if i > 0 {
                        f.write_str(":")?;
                    }
                    write!(f, "{:x}", u16::from_be_bytes([pair[0], pair[1]]))?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Address {
    type Err = CidrError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validator::parse_address(s)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(ip) => Address::V4(ip.octets()),
            IpAddr::V6(ip) => Address::V6(ip.octets()),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            Address::V6(octets) => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }
}
