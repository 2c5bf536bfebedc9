// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    scanner::Cursor,
    strings::*,
    text::{impl_from_str, AddressText},
    AddressError, Ipv4Subnet,
};
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

/**
An IPv4 address as its 32-bit integer value, octet 0 being the most
significant byte (i.e. the network byte order reading of the address).

Every `u32` is a valid address. Ordering is by unsigned value.
*/
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Ipv4Address(u32);

impl Ipv4Address {
    /// `0.0.0.0`
    pub const ANY: Self = Ipv4Address(0);
    /// `255.255.255.255`
    pub const BROADCAST: Self = Ipv4Address(u32::MAX);
    /// Length of `255.255.255.255`.
    pub const MAXIMUM_LENGTH_REQUIRED: usize = 15;

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Ipv4Address(u32::from_be_bytes([a, b, c, d]))
    }

    pub const fn from_bits(bits: u32) -> Self {
        Ipv4Address(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Ipv4Address(u32::from_be_bytes(octets))
    }

    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Interpret `raw` as read from the wire (network byte order) on this host.
    pub const fn from_network_order(raw: u32) -> Self {
        Ipv4Address(u32::from_be(raw))
    }

    /// Inverse of [Ipv4Address::from_network_order].
    pub const fn to_network_order(self) -> u32 {
        self.0.to_be()
    }

    /// Read the first four bytes of `bytes`, most significant first.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        match bytes.first_chunk::<4>() {
            Some(octets) => Ok(Self::from_octets(*octets)),
            None => Err(AddressError::BufferTooShort {
                need: 4,
                got: bytes.len(),
            }),
        }
    }

    /// `None` unless `addr` is an IPv4 socket address.
    pub fn try_from_socket_addr(addr: &SocketAddr) -> Option<Self> {
        match addr {
            SocketAddr::V4(v4) => Some(Self::from(*v4.ip())),
            SocketAddr::V6(_) => None,
        }
    }

    /// `None` unless `addr` is an IPv4 address.
    pub fn try_from_ip_addr(addr: IpAddr) -> Option<Self> {
        match addr {
            IpAddr::V4(v4) => Some(Self::from(v4)),
            IpAddr::V6(_) => None,
        }
    }

    /// Octet `index` (0 is the leftmost).
    pub fn octet(self, index: usize) -> Result<u8, AddressError> {
        self.octets()
            .get(index)
            .copied()
            .ok_or(AddressError::OctetIndex(index))
    }

    /// Whether this address lies inside `subnet`.
    pub fn is_in_subnet(self, subnet: &Ipv4Subnet) -> bool {
        subnet.contains(self)
    }

    /// Address `offset` positions further, wrapping past `255.255.255.255`.
    pub const fn wrapping_add(self, offset: u32) -> Self {
        Ipv4Address(self.0.wrapping_add(offset))
    }

    pub const fn checked_add(self, offset: u32) -> Option<Self> {
        match self.0.checked_add(offset) {
            Some(bits) => Some(Ipv4Address(bits)),
            None => None,
        }
    }

    pub const fn checked_sub(self, offset: u32) -> Option<Self> {
        match self.0.checked_sub(offset) {
            Some(bits) => Some(Ipv4Address(bits)),
            None => None,
        }
    }
}

impl AddressText for Ipv4Address {
    const MAX_TEXT_LEN: usize = Self::MAXIMUM_LENGTH_REQUIRED;
    const NAME: &'static str = NAME_V4;

    fn read(cursor: &mut Cursor<'_>) -> Option<Self> {
        cursor.read_dotted_quad().map(Self::from_octets)
    }
}

impl_from_str!(Ipv4Address);

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl fmt::Debug for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address(u32::from(addr))
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl From<u32> for Ipv4Address {
    fn from(bits: u32) -> Self {
        Ipv4Address(bits)
    }
}

impl From<Ipv4Address> for u32 {
    fn from(addr: Ipv4Address) -> Self {
        addr.0
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(octets: [u8; 4]) -> Self {
        Self::from_octets(octets)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{SocketAddrV4, SocketAddrV6};

    const TEST_1: &str = "192.168.1.1";
    const TEST_MAX: &str = "255.255.255.255";
    const TEST_MIN: &str = "0.0.0.0";
    const TEST_CIDR: &str = "10.0.0.0/24";

    #[test]
    fn test_parse_basic() {
        let ip: Ipv4Address = Ipv4Address::parse(TEST_1).unwrap();
        assert_eq!(ip, Ipv4Address::new(192, 168, 1, 1));
        assert_eq!(ip.to_bits(), 0xC0A8_0101);
        assert_eq!(Ipv4Address::parse(TEST_MAX).unwrap(), Ipv4Address::BROADCAST);
        assert_eq!(Ipv4Address::parse(TEST_MIN).unwrap(), Ipv4Address::ANY);
        assert_eq!(TEST_1.parse::<Ipv4Address>().unwrap(), ip);
    }

    #[rustfmt::skip]
    #[test]
    fn test_parse_rejects() {
        let bad: Vec<&str> = vec![
            "256.0.0.0", "1.2.3.4.5", "1.2.3", "", "1..2.3",
            "01.2.3.4", "1.2.3.04", " 1.2.3.4", "1.2.3.4 ", "1.2.3.-4",
            "1.2.3.1234", "::1", "a.b.c.d", "1.2.3.300",
        ];
        for input in bad {
            assert!(Ipv4Address::try_parse(input).is_none(), "Failed: '{input}'");
            let err: AddressError = Ipv4Address::parse(input).unwrap_err();
            assert!(err.is_parse_error());
        }
    }

    #[test]
    fn test_prefix_parse() {
        let (ip, read) = Ipv4Address::try_parse_prefix(TEST_CIDR).unwrap();
        assert_eq!(ip, Ipv4Address::new(10, 0, 0, 0));
        assert_eq!(read, 8);

        let (_, read) = Ipv4Address::try_parse_prefix(TEST_1).unwrap();
        assert_eq!(read, TEST_1.len());

        let (ip, read) = Ipv4Address::try_parse_prefix("1.2.3.4.5").unwrap();
        assert_eq!(ip, Ipv4Address::new(1, 2, 3, 4));
        assert_eq!(read, 7);

        assert!(Ipv4Address::try_parse_prefix("1.2.3").is_none());
    }

    #[test]
    fn test_roundtrip_samples() {
        let mut bits: u64 = 0;
        while bits <= u32::MAX as u64 {
            let ip: Ipv4Address = Ipv4Address::from_bits(bits as u32);
            let text: String = ip.to_string();
            assert!(text.len() <= Ipv4Address::MAXIMUM_LENGTH_REQUIRED);
            assert!(!text.split('.').any(|o| o.len() > 1 && o.starts_with('0')));
            assert_eq!(Ipv4Address::parse(&text).unwrap(), ip);
            bits += 0x0010_10F3;
        }
    }

    #[test]
    fn test_try_format() {
        let ip: Ipv4Address = Ipv4Address::BROADCAST;
        let mut buf: [u8; 15] = [0; 15];
        assert_eq!(ip.try_format(&mut buf), Some(15));
        assert_eq!(&buf, TEST_MAX.as_bytes());

        let mut short: [u8; 14] = [b'#'; 14];
        assert_eq!(ip.try_format(&mut short), None);
        assert_eq!(short, [b'#'; 14]);
    }

    #[test]
    fn test_octets() {
        let ip: Ipv4Address = Ipv4Address::parse(TEST_1).unwrap();
        assert_eq!(ip.octet(0).unwrap(), 192);
        assert_eq!(ip.octet(3).unwrap(), 1);
        assert_eq!(ip.octet(4), Err(AddressError::OctetIndex(4)));
        assert!(ip.octet(4).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_bytes_and_byte_order() {
        let ip: Ipv4Address = Ipv4Address::from_bytes(&[10, 1, 2, 3, 99]).unwrap();
        assert_eq!(ip, Ipv4Address::new(10, 1, 2, 3));
        assert_eq!(
            Ipv4Address::from_bytes(&[10, 1, 2]),
            Err(AddressError::BufferTooShort { need: 4, got: 3 })
        );

        let wire: u32 = u32::from_ne_bytes([10, 1, 2, 3]);
        assert_eq!(Ipv4Address::from_network_order(wire), ip);
        assert_eq!(ip.to_network_order(), wire);
    }

    #[test]
    fn test_socket_addr_family() {
        let v4: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(10, 0, 0, 1), 80));
        assert_eq!(
            Ipv4Address::try_from_socket_addr(&v4),
            Some(Ipv4Address::new(10, 0, 0, 1))
        );
        let v6: SocketAddr = SocketAddr::V6(SocketAddrV6::new("::1".parse().unwrap(), 80, 0, 0));
        assert_eq!(Ipv4Address::try_from_socket_addr(&v6), None);
        assert_eq!(Ipv4Address::try_from_ip_addr("::1".parse().unwrap()), None);
    }

    #[test]
    fn test_ordering_is_unsigned() {
        let low: Ipv4Address = Ipv4Address::parse("127.255.255.255").unwrap();
        let high: Ipv4Address = Ipv4Address::parse("128.0.0.0").unwrap();
        assert!(low < high);
        assert!(high < Ipv4Address::BROADCAST);
    }

    #[test]
    fn test_std_interop() {
        let std_ip: Ipv4Addr = TEST_1.parse().unwrap();
        let ip: Ipv4Address = std_ip.into();
        assert_eq!(ip.to_string(), std_ip.to_string());
        assert_eq!(Ipv4Addr::from(ip), std_ip);
    }
}
