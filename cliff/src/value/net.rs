//! IP addresses, networks and masks.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use ipnet::IpNet;

fn parse_trimmed<T>(raw: &str, what: &str) -> Result<T, String>
where
    T: FromStr,
{
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("invalid {what} '{raw}'"))
}

scalar_value!(
    IpAddr,
    name = "ip",
    parse = |raw: &str| parse_trimmed::<IpAddr>(raw, "IP address"),
    render = |v: &IpAddr| v.to_string(),
    default = |v: &IpAddr| Some(v.to_string()),
);

scalar_value!(
    Ipv4Addr,
    name = "ipv4",
    parse = |raw: &str| parse_trimmed::<Ipv4Addr>(raw, "IPv4 address"),
    render = |v: &Ipv4Addr| v.to_string(),
    default = |v: &Ipv4Addr| Some(v.to_string()),
);

scalar_value!(
    Ipv6Addr,
    name = "ipv6",
    parse = |raw: &str| parse_trimmed::<Ipv6Addr>(raw, "IPv6 address"),
    render = |v: &Ipv6Addr| v.to_string(),
    default = |v: &Ipv6Addr| Some(v.to_string()),
);

// Host bits are dropped so `10.1.2.3/8` binds as `10.0.0.0/8`.
scalar_value!(
    IpNet,
    name = "ipNet",
    parse = |raw: &str| parse_trimmed::<IpNet>(raw, "CIDR network").map(|net| net.trunc()),
    render = |v: &IpNet| v.to_string(),
    default = |v: &IpNet| Some(v.to_string()),
);

/// A contiguous IPv4 network mask such as `255.255.255.0`.
///
/// Accepts the dotted form or eight hex digits (`ffffff00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpMask(Ipv4Addr);

impl IpMask {
    /// Builds the mask with the leading `prefix` bits set.
    ///
    /// Returns `None` when `prefix` exceeds 32.
    #[must_use]
    pub fn from_prefix(prefix: u8) -> Option<Self> {
        let bits = match prefix {
            0 => 0,
            1..=32 => u32::MAX << (32 - u32::from(prefix)),
            _ => return None,
        };
        Some(Self(Ipv4Addr::from(bits)))
    }

    /// Number of leading one bits.
    #[must_use]
    pub fn prefix_len(self) -> u32 {
        u32::from(self.0).leading_ones()
    }

    /// The mask as an address.
    #[must_use]
    pub const fn addr(self) -> Ipv4Addr {
        self.0
    }

    fn from_bits(raw: &str, bits: u32) -> Result<Self, String> {
        if bits.leading_ones() + bits.trailing_zeros() == 32 {
            Ok(Self(Ipv4Addr::from(bits)))
        } else {
            Err(format!("IP mask '{raw}' is not contiguous"))
        }
    }
}

impl Default for IpMask {
    fn default() -> Self {
        Self(Ipv4Addr::UNSPECIFIED)
    }
}

impl fmt::Display for IpMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for IpMask {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(addr) = trimmed.parse::<Ipv4Addr>() {
            return Self::from_bits(raw, u32::from(addr));
        }
        if trimmed.len() == 8 {
            if let Ok(bits) = u32::from_str_radix(trimmed, 16) {
                return Self::from_bits(raw, bits);
            }
        }
        Err(format!("invalid IP mask '{raw}'"))
    }
}

scalar_value!(
    IpMask,
    name = "ipMask",
    parse = IpMask::from_str,
    render = |v: &IpMask| v.to_string(),
    default = |v: &IpMask| (v.prefix_len() > 0).then(|| v.to_string()),
);
