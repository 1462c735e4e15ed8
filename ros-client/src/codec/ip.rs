use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

use super::WireValue;
use crate::error::{DecodeError, EncodeError};

/// A single IPv4 or IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ip(pub IpAddr);

impl WireValue for Ip {
    fn from_wire(s: &str) -> Result<Self, DecodeError> {
        s.parse::<IpAddr>().map(Ip).map_err(|source| DecodeError::Ip {
            value: s.to_string(),
            source,
        })
    }

    fn to_wire(&self) -> Result<String, EncodeError> {
        Ok(self.0.to_string())
    }
}

impl fmt::Display for Ip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<IpAddr> for Ip {
    fn from(value: IpAddr) -> Self {
        Ip(value)
    }
}

impl From<Ipv4Addr> for Ip {
    fn from(value: Ipv4Addr) -> Self {
        Ip(value.into())
    }
}

impl From<Ipv6Addr> for Ip {
    fn from(value: Ipv6Addr) -> Self {
        Ip(value.into())
    }
}

/// An interface address in CIDR notation, e.g. `192.0.2.1/24`.
///
/// The host address is kept as given: `192.0.2.1/24` encodes back to
/// `192.0.2.1/24`, not to the network base `192.0.2.0/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpNet {
    addr: IpAddr,
    prefix_len: u8,
}

impl IpNet {
    /// Build from a host address and prefix length.
    ///
    /// Returns `None` if the prefix is longer than the address.
    pub fn new(addr: IpAddr, prefix_len: u8) -> Option<Self> {
        (prefix_len <= max_prefix_len(addr)).then_some(IpNet { addr, prefix_len })
    }

    /// The host address.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The mask as an address, e.g. `255.255.255.0` for a `/24`.
    pub fn netmask(&self) -> IpAddr {
        match self.addr {
            IpAddr::V4(_) => {
                let bits = u32::MAX
                    .checked_shl(32 - u32::from(self.prefix_len))
                    .unwrap_or(0);
                IpAddr::V4(Ipv4Addr::from(bits))
            }
            IpAddr::V6(_) => {
                let bits = u128::MAX
                    .checked_shl(128 - u32::from(self.prefix_len))
                    .unwrap_or(0);
                IpAddr::V6(Ipv6Addr::from(bits))
            }
        }
    }

    /// The network base address, with host bits cleared.
    pub fn network(&self) -> IpAddr {
        match (self.addr, self.netmask()) {
            (IpAddr::V4(addr), IpAddr::V4(mask)) => {
                IpAddr::V4(Ipv4Addr::from(u32::from(addr) & u32::from(mask)))
            }
            (IpAddr::V6(addr), IpAddr::V6(mask)) => {
                IpAddr::V6(Ipv6Addr::from(u128::from(addr) & u128::from(mask)))
            }
            _ => self.addr,
        }
    }

    /// Whether `ip` falls inside this network.
    pub fn contains(&self, ip: IpAddr) -> bool {
        let Some(other) = IpNet::new(ip, self.prefix_len) else {
            return false;
        };
        other.network() == self.network()
    }
}

fn max_prefix_len(addr: IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

impl WireValue for IpNet {
    fn from_wire(s: &str) -> Result<Self, DecodeError> {
        let invalid = |reason| DecodeError::Cidr {
            value: s.to_string(),
            reason,
        };

        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| invalid("missing prefix length"))?;
        let addr: IpAddr = addr.parse().map_err(|_| invalid("invalid address"))?;
        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("invalid prefix length"));
        }
        let prefix_len: u8 = prefix
            .parse()
            .map_err(|_| invalid("invalid prefix length"))?;
        IpNet::new(addr, prefix_len).ok_or_else(|| invalid("prefix length out of range"))
    }

    fn to_wire(&self) -> Result<String, EncodeError> {
        Ok(self.to_string())
    }
}

impl fmt::Display for IpNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};

    #[test]
    fn test_ip_v4_and_v6() {
        let v4: Ip = decode("\"192.0.2.1\"").unwrap();
        assert_eq!(v4, Ip::from(Ipv4Addr::new(192, 0, 2, 1)));
        assert_eq!(encode(&v4).unwrap(), "\"192.0.2.1\"");

        let v6 = Ip::from_wire("2001:0db8:0000::0001").unwrap();
        assert_eq!(v6.to_wire().unwrap(), "2001:db8::1");
    }

    #[test]
    fn test_ip_invalid() {
        for input in ["", "1.2.3", "1.2.3.4/24", "host.example"] {
            assert!(matches!(Ip::from_wire(input), Err(DecodeError::Ip { .. })));
        }
    }

    #[test]
    fn test_cidr_keeps_host_address() {
        let net: IpNet = decode("\"1.2.3.4/24\"").unwrap();
        assert_eq!(net.addr(), IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)));
        assert_eq!(net.prefix_len(), 24);
        assert_eq!(net.netmask(), IpAddr::V4(Ipv4Addr::new(255, 255, 255, 0)));
        assert_eq!(net.network(), IpAddr::V4(Ipv4Addr::new(1, 2, 3, 0)));
        assert_eq!(encode(&net).unwrap(), "\"1.2.3.4/24\"");
    }

    #[test]
    fn test_cidr_v6() {
        let net = IpNet::from_wire("2001:db8::5/64").unwrap();
        assert_eq!(net.network().to_string(), "2001:db8::");
        assert_eq!(net.to_string(), "2001:db8::5/64");
        assert!(net.contains("2001:db8::ffff".parse().unwrap()));
        assert!(!net.contains("2001:db9::1".parse().unwrap()));
        assert!(!net.contains("10.0.0.1".parse().unwrap()));
    }

    #[test]
    fn test_cidr_edge_prefixes() {
        let all = IpNet::from_wire("10.1.2.3/0").unwrap();
        assert_eq!(all.netmask().to_string(), "0.0.0.0");
        assert!(all.contains("8.8.8.8".parse().unwrap()));

        let host = IpNet::from_wire("10.1.2.3/32").unwrap();
        assert_eq!(host.network().to_string(), "10.1.2.3");
    }

    #[test]
    fn test_cidr_invalid() {
        for input in [
            "1.2.3.4",
            "1.2.3.4/",
            "1.2.3.4/33",
            "1.2.3.4/+8",
            "1.2.3.4/ 8",
            "::1/129",
            "1.2.3/24",
            "/24",
        ] {
            assert!(
                matches!(IpNet::from_wire(input), Err(DecodeError::Cidr { .. })),
                "{input:?} should not decode"
            );
        }
    }
}
