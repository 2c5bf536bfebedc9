// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three interchangeable spellings of an IPv4 prefix length.

use super::{
    scanner::Cursor,
    strings::*,
    text::{impl_from_str, AddressText},
    AddressError, Ipv4Address, IPV4_BITS,
};
use std::fmt;

/// Leading ones of `bits`, if `bits` is a run of ones followed only by zeros.
const fn contiguous_prefix(bits: u32) -> Option<u8> {
    let ones: u32 = bits.leading_ones();
    match bits.checked_shl(ones) {
        Some(0) | None => Some(ones as u8),
        Some(_) => None,
    }
}

/* -------------------------------------------------------------------------- */

/// CIDR prefix length, `0..=32`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Ipv4Cidr(u8);

impl Ipv4Cidr {
    pub const MAX: Self = Ipv4Cidr(IPV4_BITS);

    pub const fn new(prefix: u8) -> Result<Self, AddressError> {
        if prefix > IPV4_BITS {
            return Err(AddressError::InvalidPrefix(prefix));
        }
        Ok(Ipv4Cidr(prefix))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Mask bits, `0xFFFFFFFF << (32 - prefix)` with `/0` being all zeros.
    pub const fn mask_bits(self) -> u32 {
        match self.0 {
            0 => 0,
            prefix => u32::MAX << (IPV4_BITS - prefix),
        }
    }

    pub const fn to_mask(self) -> Ipv4SubnetMask {
        Ipv4SubnetMask(self.mask_bits())
    }

    pub const fn to_wildcard(self) -> Ipv4WildcardMask {
        Ipv4WildcardMask(!self.mask_bits())
    }

    /// Number of addresses covered, `2^(32 - prefix)`.
    pub const fn total_addresses(self) -> u64 {
        1u64 << (IPV4_BITS - self.0)
    }
}

impl AddressText for Ipv4Cidr {
    const MAX_TEXT_LEN: usize = 2;
    const NAME: &'static str = NAME_CIDR;

    fn read(cursor: &mut Cursor<'_>) -> Option<Self> {
        cursor.read_prefix_len().map(Ipv4Cidr)
    }
}

impl fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Ipv4Cidr {
    type Error = AddressError;

    fn try_from(prefix: u8) -> Result<Self, Self::Error> {
        Self::new(prefix)
    }
}

impl From<Ipv4Cidr> for u8 {
    fn from(cidr: Ipv4Cidr) -> Self {
        cidr.0
    }
}

/* -------------------------------------------------------------------------- */

/// Subnet mask such as `255.255.255.0`; ones are always contiguous.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Ipv4SubnetMask(u32);

impl Ipv4SubnetMask {
    /// Rejects bit patterns that are not ones followed by zeros.
    pub const fn from_bits(bits: u32) -> Result<Self, AddressError> {
        match contiguous_prefix(bits) {
            Some(_) => Ok(Ipv4SubnetMask(bits)),
            None => Err(AddressError::InvalidMask(bits)),
        }
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn to_address(self) -> Ipv4Address {
        Ipv4Address::from_bits(self.0)
    }

    pub const fn cidr(self) -> Ipv4Cidr {
        Ipv4Cidr(self.0.leading_ones() as u8)
    }

    pub const fn to_wildcard(self) -> Ipv4WildcardMask {
        Ipv4WildcardMask(!self.0)
    }
}

impl AddressText for Ipv4SubnetMask {
    const MAX_TEXT_LEN: usize = Ipv4Address::MAXIMUM_LENGTH_REQUIRED;
    const NAME: &'static str = NAME_MASK;

    fn read(cursor: &mut Cursor<'_>) -> Option<Self> {
        cursor.attempt(|c| Self::try_from(Ipv4Address::read(c)?).ok())
    }
}

impl fmt::Display for Ipv4SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_address(), f)
    }
}

impl fmt::Debug for Ipv4SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ipv4SubnetMask({}, /{})", self.to_address(), self.cidr())
    }
}

impl TryFrom<Ipv4Address> for Ipv4SubnetMask {
    type Error = AddressError;

    fn try_from(addr: Ipv4Address) -> Result<Self, Self::Error> {
        Self::from_bits(addr.to_bits())
    }
}

impl From<Ipv4Cidr> for Ipv4SubnetMask {
    fn from(cidr: Ipv4Cidr) -> Self {
        cidr.to_mask()
    }
}

impl From<Ipv4WildcardMask> for Ipv4SubnetMask {
    fn from(wildcard: Ipv4WildcardMask) -> Self {
        wildcard.to_mask()
    }
}

/* -------------------------------------------------------------------------- */

/// Wildcard (inverse) mask such as `0.0.0.255`; zeros then ones.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Ipv4WildcardMask(u32);

impl Ipv4WildcardMask {
    /// Rejects bit patterns that are not zeros followed by ones.
    pub const fn from_bits(bits: u32) -> Result<Self, AddressError> {
        match contiguous_prefix(!bits) {
            Some(_) => Ok(Ipv4WildcardMask(bits)),
            None => Err(AddressError::InvalidWildcard(bits)),
        }
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    pub const fn to_address(self) -> Ipv4Address {
        Ipv4Address::from_bits(self.0)
    }

    pub const fn cidr(self) -> Ipv4Cidr {
        Ipv4Cidr(self.0.leading_zeros() as u8)
    }

    pub const fn to_mask(self) -> Ipv4SubnetMask {
        Ipv4SubnetMask(!self.0)
    }
}

impl AddressText for Ipv4WildcardMask {
    const MAX_TEXT_LEN: usize = Ipv4Address::MAXIMUM_LENGTH_REQUIRED;
    const NAME: &'static str = NAME_WILDCARD;

    fn read(cursor: &mut Cursor<'_>) -> Option<Self> {
        cursor.attempt(|c| Self::try_from(Ipv4Address::read(c)?).ok())
    }
}

impl fmt::Display for Ipv4WildcardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_address(), f)
    }
}

impl fmt::Debug for Ipv4WildcardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ipv4WildcardMask({}, /{})", self.to_address(), self.cidr())
    }
}

impl TryFrom<Ipv4Address> for Ipv4WildcardMask {
    type Error = AddressError;

    fn try_from(addr: Ipv4Address) -> Result<Self, Self::Error> {
        Self::from_bits(addr.to_bits())
    }
}

impl From<Ipv4Cidr> for Ipv4WildcardMask {
    fn from(cidr: Ipv4Cidr) -> Self {
        cidr.to_wildcard()
    }
}

impl From<Ipv4SubnetMask> for Ipv4WildcardMask {
    fn from(mask: Ipv4SubnetMask) -> Self {
        mask.to_wildcard()
    }
}

impl From<Ipv4SubnetMask> for Ipv4Cidr {
    fn from(mask: Ipv4SubnetMask) -> Self {
        mask.cidr()
    }
}

impl From<Ipv4WildcardMask> for Ipv4Cidr {
    fn from(wildcard: Ipv4WildcardMask) -> Self {
        wildcard.cidr()
    }
}

impl_from_str!(Ipv4Cidr, Ipv4SubnetMask, Ipv4WildcardMask);

/* -------------------------------------------------------------------------- */
