use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::address::{Address, Family};
use crate::validator::parse_address;
use crate::CidrError;

/// Address block computed from `address/prefix` notation.
///
/// Both boundaries are fixed at construction and never change afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CidrRange {
    address: Address,
    prefix: u8,
    start: Address,
    end: Address,
}

impl CidrRange {
    /// Builds the block containing `address` with the given prefix length.
    ///
    /// Prefix must be in `1..=32` for IPv4 and `1..=128` for IPv6.
    pub fn new(address: Address, prefix: u32) -> Result<Self, CidrError> {
        if prefix < 1 || prefix > u32::from(address.family().max_prefix()) {
            trace!("prefix /{} out of bounds for {}", prefix, address);
            return Err(CidrError::InvalidPrefix);
        }
        let prefix = prefix as u8;
        let start = address.network(prefix);
        let end = start.broadcast(prefix);
        debug!("{}/{} spans {} - {}", address, prefix, start, end);
        Ok(CidrRange {
            address,
            prefix,
            start,
            end,
        })
    }

    /// Address as it was written, host bits included.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix
    }

    pub fn family(&self) -> Family {
        self.address.family()
    }

    pub fn network(&self) -> Address {
        self.start
    }

    pub fn broadcast(&self) -> Address {
        self.end
    }

    pub fn host_mask(&self) -> Address {
        Address::host_mask(self.family(), self.prefix)
    }

    pub fn network_address(&self) -> String {
        self.start.to_string()
    }

    pub fn broadcast_address(&self) -> String {
        self.end.to_string()
    }

    /// Compares `addr` numerically against the block boundaries.
    pub fn contains_address(&self, addr: &Address, include_broadcast: bool) -> bool {
        if self.start.cmp_value(addr) == Ordering::Greater {
            return false;
        }
        match addr.cmp_value(&self.end) {
            Ordering::Less => true,
            Ordering::Equal => include_broadcast,
            Ordering::Greater => false,
        }
    }

    pub fn contains(&self, addr: &str, include_broadcast: bool) -> Result<bool, CidrError> {
        let target = parse_address(addr)?;
        Ok(self.contains_address(&target, include_broadcast))
    }

    pub fn is_in_range(&self, addr: &str) -> Result<bool, CidrError> {
        self.contains(addr, true)
    }

    /// Like [`is_in_range`](#method.is_in_range) but the broadcast address
    /// is not a host.
    pub fn is_in_hosts_range(&self, addr: &str) -> Result<bool, CidrError> {
        self.contains(addr, false)
    }
}

impl FromStr for CidrRange {
    type Err = CidrError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slash = match s.find('/') {
            Some(slash) => slash,
            None => {
                trace!("no '/' in {:?}", s);
                return Err(CidrError::MissingSlash);
            }
        };
        let address = parse_address(&s[..slash])?;
        let prefix = s[slash + 1..]
            .parse::<u32>()
            .map_err(|_| CidrError::InvalidPrefix)?;
        CidrRange::new(address, prefix)
    }
}

impl Display for CidrRange {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}/{}", self.start, self.prefix)
    }
}
