// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    scanner::Cursor,
    strings::*,
    text::{impl_from_str, AddressText},
    AddressError, Ipv4Address, Ipv4AddressRange, Ipv4Cidr, Ipv4SubnetMask, Ipv4WildcardMask,
};
use std::fmt;
use tracing::debug;

/**
An IPv4 subnet, kept as its network address and prefix length.

Whatever address it is built from has its host bits cleared, so
`10.0.0.77/24` and `10.0.0.0/24` are the same subnet. Broadcast, usable
bounds and host counts are derived on every call.
*/
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Ipv4Subnet {
    network: Ipv4Address,
    cidr: Ipv4Cidr,
}

impl Ipv4Subnet {
    /// Length of `255.255.255.255/32`.
    pub const MAXIMUM_LENGTH_REQUIRED: usize = Ipv4Address::MAXIMUM_LENGTH_REQUIRED + 3;

    pub const fn new(addr: Ipv4Address, cidr: Ipv4Cidr) -> Self {
        Ipv4Subnet {
            network: Ipv4Address::from_bits(addr.to_bits() & cidr.mask_bits()),
            cidr,
        }
    }

    pub const fn with_mask(addr: Ipv4Address, mask: Ipv4SubnetMask) -> Self {
        Self::new(addr, mask.cidr())
    }

    pub const fn with_wildcard(addr: Ipv4Address, wildcard: Ipv4WildcardMask) -> Self {
        Self::new(addr, wildcard.cidr())
    }

    /// Convenience over [Ipv4Subnet::new] taking a raw prefix length.
    pub fn with_prefix(addr: Ipv4Address, prefix: u8) -> Result<Self, AddressError> {
        Ok(Self::new(addr, Ipv4Cidr::new(prefix)?))
    }

    /**
    Parse `address<sep>mask`, e.g. `10.0.0.0,255.255.255.0` with `sep = ','`.

    Whitespace after the separator is allowed. The mask must have contiguous
    bits; a mask that parses as an address but is not contiguous is reported
    as [AddressError::InvalidMask].
    */
    pub fn parse_with_mask(s: &str, sep: char) -> Result<Self, AddressError> {
        let mut c: Cursor = Cursor::new(s);
        let parsed: Option<(Ipv4Address, Ipv4Address)> = c.attempt(|c| {
            let addr: Ipv4Address = Ipv4Address::read(c)?;
            let rest: &[u8] = c.remaining();
            let sep_len: usize = sep.len_utf8();
            let mut tmp: [u8; 4] = [0; 4];
            if !rest.starts_with(sep.encode_utf8(&mut tmp).as_bytes()) {
                return None;
            }
            let mut tail: Cursor = Cursor::new(&rest[sep_len..]);
            tail.eat_whitespace();
            let mask: Ipv4Address = Ipv4Address::read(&mut tail)?;
            tail.is_empty().then_some((addr, mask))
        });

        let Some((addr, mask)) = parsed else {
            let err: AddressError = AddressError::invalid(NAME_SUBNET, s);
            debug!("{err}");
            return Err(err);
        };
        Ok(Self::with_mask(addr, Ipv4SubnetMask::try_from(mask)?))
    }

    pub const fn network_address(self) -> Ipv4Address {
        self.network
    }

    pub const fn broadcast_address(self) -> Ipv4Address {
        Ipv4Address::from_bits(self.network.to_bits() | !self.cidr.mask_bits())
    }

    pub const fn cidr(self) -> Ipv4Cidr {
        self.cidr
    }

    pub const fn prefix_len(self) -> u8 {
        self.cidr.get()
    }

    pub const fn mask(self) -> Ipv4SubnetMask {
        self.cidr.to_mask()
    }

    pub const fn wildcard(self) -> Ipv4WildcardMask {
        self.cidr.to_wildcard()
    }

    /// Network address + 1, except for `/31` and `/32` where every address is usable.
    pub const fn first_usable(self) -> Ipv4Address {
        match self.cidr.get() {
            31 | 32 => self.network,
            _ => self.network.wrapping_add(1),
        }
    }

    /// Broadcast address - 1, except for `/31` and `/32`.
    pub const fn last_usable(self) -> Ipv4Address {
        let broadcast: Ipv4Address = self.broadcast_address();
        match self.cidr.get() {
            31 | 32 => broadcast,
            _ => Ipv4Address::from_bits(broadcast.to_bits().wrapping_sub(1)),
        }
    }

    /// `2^(32 - prefix)`, which is `2^32` for `/0`.
    pub const fn total_hosts(self) -> u64 {
        self.cidr.total_addresses()
    }

    /// Total minus network and broadcast; `/31` has 2 and `/32` has 1.
    pub const fn usable_hosts(self) -> u64 {
        match self.cidr.get() {
            31 => 2,
            32 => 1,
            _ => self.total_hosts() - 2,
        }
    }

    pub const fn contains(self, addr: Ipv4Address) -> bool {
        (addr.to_bits() & self.cidr.mask_bits()) == self.network.to_bits()
    }

    /// Whether `other` lies completely inside this subnet.
    pub const fn contains_subnet(self, other: Ipv4Subnet) -> bool {
        other.cidr.get() >= self.cidr.get() && self.contains(other.network)
    }

    /// `[network, broadcast]`
    pub fn all_addresses(self) -> Ipv4AddressRange {
        Ipv4AddressRange::from_subnet(self)
    }

    /// `[first_usable, last_usable]`
    pub fn usable_addresses(self) -> Ipv4AddressRange {
        Ipv4AddressRange::from_trusted(self.first_usable(), self.usable_hosts())
    }
}

impl AddressText for Ipv4Subnet {
    const MAX_TEXT_LEN: usize = Self::MAXIMUM_LENGTH_REQUIRED;
    const NAME: &'static str = NAME_SUBNET;

    /// `address/prefix` or `address/mask`
    fn read(cursor: &mut Cursor<'_>) -> Option<Self> {
        cursor.attempt(|c| {
            let addr: Ipv4Address = Ipv4Address::read(c)?;
            if !c.eat(SLASH) {
                return None;
            }
            if let Some(mask) = Ipv4SubnetMask::read(c) {
                return Some(Self::with_mask(addr, mask));
            }
            Some(Self::new(addr, Ipv4Cidr::read(c)?))
        })
    }
}

impl_from_str!(Ipv4Subnet);

impl fmt::Display for Ipv4Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.cidr)
    }
}

impl fmt::Debug for Ipv4Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/* -------------------------------------------------------------------------- */
