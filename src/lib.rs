//! Network and broadcast addresses of IPv4 and IPv6 CIDR blocks.
//!
//! ```
//! let cidr = cidr_range::parse_cidr("192.168.1.2/24").unwrap();
//! assert_eq!("192.168.1.0", cidr.network_address());
//! assert_eq!("192.168.1.255", cidr.broadcast_address());
//! assert_eq!(Ok(false), cidr.is_in_hosts_range("192.168.1.255"));
//! ```

use thiserror::Error;

pub mod address;
pub mod range;
pub mod validator;

pub use address::{Address, Family};
pub use range::CidrRange;
pub use validator::{parse_address, validate_ip_address};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum CidrError {
    #[error("Invalid empty address!")]
    EmptyAddress,
    #[error("Invalid address!")]
    MalformedAddress,
    /// No `/` between address and prefix length.
    #[error("Not a valid CIDR format!")]
    MissingSlash,
    /// Prefix length is not an integer or is out of bounds for the family.
    #[error("Not a valid CIDR prefix!")]
    InvalidPrefix,
}

/// Parses `address/prefix` into a [`CidrRange`].
pub fn parse_cidr(text: &str) -> Result<CidrRange, CidrError> {
    text.parse()
}
