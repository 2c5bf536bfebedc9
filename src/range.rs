// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    scanner::Cursor,
    strings::*,
    text::{impl_from_str, AddressText},
    AddressError, Ipv4Address, Ipv4Subnet,
};
use std::fmt;
use tracing::debug;

/// Number of addresses in the whole IPv4 space; does not fit in a `u32`.
pub const MAX_RANGE_LEN: u64 = 1 << 32;

/**
A contiguous run of IPv4 addresses: a start address and a 64-bit count.

The count is `1..=2^32` and the run never passes `255.255.255.255`, so the
whole address space is representable as `0.0.0.0` + `2^32`.
*/
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Ipv4AddressRange {
    start: Ipv4Address,
    count: u64,
}

impl Ipv4AddressRange {
    /// Length of `255.255.255.255-255.255.255.255`.
    pub const MAXIMUM_LENGTH_REQUIRED: usize = 2 * Ipv4Address::MAXIMUM_LENGTH_REQUIRED + 1;

    pub fn new(start: Ipv4Address, count: u64) -> Result<Self, AddressError> {
        if count == 0 || count > MAX_RANGE_LEN {
            return Err(AddressError::RangeCount(count));
        }
        if start.to_bits() as u64 + count > MAX_RANGE_LEN {
            return Err(AddressError::RangeOverflow { start, count });
        }
        Ok(Self::from_trusted(start, count))
    }

    /// Caller guarantees the invariants checked by [Ipv4AddressRange::new].
    pub(crate) const fn from_trusted(start: Ipv4Address, count: u64) -> Self {
        Ipv4AddressRange { start, count }
    }

    /// Inclusive bounds.
    pub fn from_bounds(first: Ipv4Address, last: Ipv4Address) -> Result<Self, AddressError> {
        if first > last {
            return Err(AddressError::RangeOrder(first, last));
        }
        let count: u64 = (last.to_bits() - first.to_bits()) as u64 + 1;
        Ok(Self::from_trusted(first, count))
    }

    pub const fn single(addr: Ipv4Address) -> Self {
        Self::from_trusted(addr, 1)
    }

    /// `[network, broadcast]` of `subnet`.
    pub const fn from_subnet(subnet: Ipv4Subnet) -> Self {
        Self::from_trusted(subnet.network_address(), subnet.total_hosts())
    }

    pub const fn first(self) -> Ipv4Address {
        self.start
    }

    pub const fn last(self) -> Ipv4Address {
        self.start.wrapping_add((self.count - 1) as u32)
    }

    /// Number of addresses; `2^32` for the whole space, hence `u64`.
    pub const fn len(self) -> u64 {
        self.count
    }

    /// Always false, a range holds at least one address.
    pub const fn is_empty(self) -> bool {
        false
    }

    pub const fn contains(self, addr: Ipv4Address) -> bool {
        addr.to_bits() >= self.start.to_bits()
            && ((addr.to_bits() - self.start.to_bits()) as u64) < self.count
    }

    /**
    Sub-range of `len` addresses beginning `start` addresses into this one.

    Fails unless `len >= 1` and `start + len <= self.len()`.
    */
    pub fn slice(self, start: u64, len: u64) -> Result<Self, AddressError> {
        let out_of_bounds = || AddressError::SliceBounds {
            start,
            len,
            total: self.count,
        };
        match start.checked_add(len) {
            Some(end) if len > 0 && end <= self.count => Ok(Self::from_trusted(
                self.start.wrapping_add(start as u32),
                len,
            )),
            _ => Err(out_of_bounds()),
        }
    }

    /// Non-allocating, single pass enumeration.
    pub const fn iter(self) -> Ipv4RangeIter {
        Ipv4RangeIter::new(self)
    }

    /// The same enumeration behind a trait object, for callers that need one.
    pub fn boxed_iter(self) -> Box<dyn AddressEnumerator> {
        Box::new(self.iter())
    }
}

/**
Read inclusive bounds from any of the range forms:
- `a.b.c.d`
- `a.b.c.d-e` (last octet only)
- `a.b.c.d-e.f.g.h`
- `a.b.c.d/prefix` or `a.b.c.d/mask`

Order of the bounds is not checked here.
*/
fn read_bounds(cursor: &mut Cursor<'_>) -> Option<(Ipv4Address, Ipv4Address)> {
    if let Some(subnet) = Ipv4Subnet::read(cursor) {
        return Some((subnet.network_address(), subnet.broadcast_address()));
    }
    cursor.attempt(|c| {
        let first: Ipv4Address = Ipv4Address::read(c)?;
        if !c.eat(DASH) {
            return Some((first, first));
        }
        if let Some(last) = Ipv4Address::read(c) {
            return Some((first, last));
        }
        let [a, b, cc, _] = first.octets();
        let end: u8 = c.read_octet()?;
        Some((first, Ipv4Address::new(a, b, cc, end)))
    })
}

impl AddressText for Ipv4AddressRange {
    const MAX_TEXT_LEN: usize = Self::MAXIMUM_LENGTH_REQUIRED;
    const NAME: &'static str = NAME_RANGE;

    fn read(cursor: &mut Cursor<'_>) -> Option<Self> {
        cursor.attempt(|c| {
            let (first, last) = read_bounds(c)?;
            Self::from_bounds(first, last).ok()
        })
    }

    /// Like the default, but reports reversed bounds as [AddressError::RangeOrder].
    fn parse(s: &(impl AsRef<[u8]> + ?Sized)) -> Result<Self, AddressError> {
        let mut cursor: Cursor = Cursor::new(s);
        let result: Result<Self, AddressError> = match read_bounds(&mut cursor) {
            Some((first, last)) if cursor.is_empty() => Self::from_bounds(first, last),
            _ => Err(AddressError::invalid(Self::NAME, s)),
        };
        if let Err(err) = &result {
            debug!("{err}");
        }
        result
    }
}

impl_from_str!(Ipv4AddressRange);

impl fmt::Display for Ipv4AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, last) = (self.first(), self.last());
        if self.count == 1 {
            return write!(f, "{first}");
        }
        let (head, tail) = (first.octets(), last.octets());
        if head[..3] == tail[..3] {
            write!(f, "{first}-{}", tail[3])
        } else {
            write!(f, "{first}-{last}")
        }
    }
}

impl fmt::Debug for Ipv4AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ipv4AddressRange({}, len {})", self.start, self.count)
    }
}

impl From<Ipv4Subnet> for Ipv4AddressRange {
    fn from(subnet: Ipv4Subnet) -> Self {
        Self::from_subnet(subnet)
    }
}

impl From<Ipv4Address> for Ipv4AddressRange {
    fn from(addr: Ipv4Address) -> Self {
        Self::single(addr)
    }
}

impl IntoIterator for Ipv4AddressRange {
    type Item = Ipv4Address;
    type IntoIter = Ipv4RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Ipv4AddressRange {
    type Item = Ipv4Address;
    type IntoIter = Ipv4RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/* -------------------------------------------------------------------------- */

/// Where an enumerator is in its pass over a range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EnumState {
    NotStarted,
    InProgress,
    Finished,
}

/**
Explicit cursor-style enumeration over IPv4 addresses.

`advance` moves to the next address and reports whether there was one;
`current` is the address advanced to. Once `advance` has returned false it
keeps doing so until `reset`.
*/
pub trait AddressEnumerator: Iterator<Item = Ipv4Address> {
    fn advance(&mut self) -> bool;
    fn current(&self) -> Option<Ipv4Address>;
    fn state(&self) -> EnumState;
    fn reset(&mut self);
}

/**
Enumerator over an [Ipv4AddressRange].

The position is a 32-bit offset from the start address; the end test is
done in 64 bits so a range of exactly `2^32` addresses ends after its last
address instead of wrapping the offset.
*/
#[derive(Clone, Debug)]
pub struct Ipv4RangeIter {
    start: Ipv4Address,
    count: u64,
    offset: u32,
    state: EnumState,
}

impl Ipv4RangeIter {
    pub const fn new(range: Ipv4AddressRange) -> Self {
        Ipv4RangeIter {
            start: range.start,
            count: range.count,
            offset: 0,
            state: EnumState::NotStarted,
        }
    }

    /// Addresses not yet produced.
    pub const fn remaining(&self) -> u64 {
        match self.state {
            EnumState::NotStarted => self.count,
            EnumState::InProgress => self.count - self.offset as u64 - 1,
            EnumState::Finished => 0,
        }
    }

    /// Move to absolute index `target`, finishing if it is out of range.
    fn seek(&mut self, target: u64) -> bool {
        if target < self.count {
            self.offset = target as u32;
            self.state = EnumState::InProgress;
            true
        } else {
            self.state = EnumState::Finished;
            false
        }
    }
}

impl AddressEnumerator for Ipv4RangeIter {
    fn advance(&mut self) -> bool {
        match self.state {
            EnumState::NotStarted => self.seek(0),
            EnumState::InProgress => self.seek(self.offset as u64 + 1),
            EnumState::Finished => false,
        }
    }

    fn current(&self) -> Option<Ipv4Address> {
        match self.state {
            EnumState::InProgress => Some(self.start.wrapping_add(self.offset)),
            _ => None,
        }
    }

    fn state(&self) -> EnumState {
        self.state
    }

    fn reset(&mut self) {
        self.offset = 0;
        self.state = EnumState::NotStarted;
    }
}

impl Iterator for Ipv4RangeIter {
    type Item = Ipv4Address;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current()
        } else {
            None
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let target: Option<u64> = match self.state {
            EnumState::NotStarted => Some(n as u64),
            EnumState::InProgress => (self.offset as u64 + 1).checked_add(n as u64),
            EnumState::Finished => return None,
        };
        // an overflowing skip lands past the end of any range
        if self.seek(target.unwrap_or(u64::MAX)) {
            self.current()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Ipv4RangeIter {}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: &str = "10.0.0.2-5";
    const FULL: &str = "10.0.0.250-10.0.1.3";
    const CIDR: &str = "10.100.0.100/29";

    fn ip(s: &str) -> Ipv4Address {
        Ipv4Address::parse(s).unwrap()
    }

    #[test]
    fn test_parse_forms() {
        let r: Ipv4AddressRange = Ipv4AddressRange::parse(SHORT).unwrap();
        let ips: Vec<Ipv4Address> = r.iter().collect();
        let expected: Vec<Ipv4Address> = vec![
            ip("10.0.0.2"),
            ip("10.0.0.3"),
            ip("10.0.0.4"),
            ip("10.0.0.5"),
        ];
        assert_eq!(ips, expected);

        let r: Ipv4AddressRange = FULL.parse().unwrap();
        assert_eq!(r.len(), 10);
        assert_eq!(r.last(), ip("10.0.1.3"));

        let r: Ipv4AddressRange = CIDR.parse().unwrap();
        assert_eq!(r.first(), ip("10.100.0.96"));
        assert_eq!(r.last(), ip("10.100.0.103"));

        let r: Ipv4AddressRange = "192.0.2.7".parse().unwrap();
        assert_eq!(r, Ipv4AddressRange::single(ip("192.0.2.7")));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(
            Ipv4AddressRange::parse("10.0.0.5-2"),
            Err(AddressError::RangeOrder(ip("10.0.0.5"), ip("10.0.0.2")))
        );
        assert!(Ipv4AddressRange::try_parse("10.0.0.5-2").is_none());
        for input in ["10.0.0.1-256", "10.0.0.1-", "10.0.0.1-5-6", "10.0.0.1/33", "-5"] {
            let err: AddressError = Ipv4AddressRange::parse(input).unwrap_err();
            assert!(err.is_parse_error(), "Failed: '{input}'");
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for input in [SHORT, FULL, "192.0.2.7", "0.0.0.0-255.255.255.255"] {
            let r: Ipv4AddressRange = input.parse().unwrap();
            assert_eq!(r.to_string(), input);
        }
        let r: Ipv4AddressRange = CIDR.parse().unwrap();
        assert_eq!(r.to_string(), "10.100.0.96-103");
        assert_eq!(r.to_string().parse::<Ipv4AddressRange>().unwrap(), r);
    }

    #[test]
    fn test_construction_bounds() {
        assert_eq!(Ipv4AddressRange::new(Ipv4Address::ANY, 0), Err(AddressError::RangeCount(0)));
        assert!(Ipv4AddressRange::new(Ipv4Address::ANY, MAX_RANGE_LEN).is_ok());
        assert!(Ipv4AddressRange::new(Ipv4Address::ANY, MAX_RANGE_LEN + 1).is_err());
        assert!(Ipv4AddressRange::new(Ipv4Address::BROADCAST, 1).is_ok());
        assert_eq!(
            Ipv4AddressRange::new(Ipv4Address::BROADCAST, 2),
            Err(AddressError::RangeOverflow {
                start: Ipv4Address::BROADCAST,
                count: 2
            })
        );
    }

    #[test]
    fn test_contains() {
        let r: Ipv4AddressRange = SHORT.parse().unwrap();
        assert!(r.contains(ip("10.0.0.2")));
        assert!(r.contains(ip("10.0.0.5")));
        assert!(!r.contains(ip("10.0.0.1")));
        assert!(!r.contains(ip("10.0.0.6")));
    }

    #[test]
    fn test_slice() {
        let r: Ipv4AddressRange = "10.0.0.0/24".parse().unwrap();
        let s: Ipv4AddressRange = r.slice(10, 5).unwrap();
        assert_eq!(s.first(), ip("10.0.0.10"));
        assert_eq!(s.last(), ip("10.0.0.14"));
        assert!(r.slice(250, 6).is_ok());
        assert_eq!(
            r.slice(250, 7),
            Err(AddressError::SliceBounds {
                start: 250,
                len: 7,
                total: 256
            })
        );
        assert!(r.slice(0, 0).is_err());
        assert!(r.slice(u64::MAX, 2).is_err());
    }

    #[test]
    fn test_state_machine() {
        let mut it: Ipv4RangeIter = Ipv4AddressRange::parse("10.0.0.1-2").unwrap().iter();
        assert_eq!(it.state(), EnumState::NotStarted);
        assert_eq!(it.current(), None);
        assert!(it.advance());
        assert_eq!(it.state(), EnumState::InProgress);
        assert_eq!(it.current(), Some(ip("10.0.0.1")));
        assert!(it.advance());
        assert_eq!(it.current(), Some(ip("10.0.0.2")));
        assert!(!it.advance());
        assert_eq!(it.state(), EnumState::Finished);
        assert!(!it.advance());
        assert_eq!(it.next(), None);

        it.reset();
        assert_eq!(it.collect::<Vec<_>>().len(), 2);
    }

    #[test]
    fn test_boxed_matches_plain() {
        let r: Ipv4AddressRange = CIDR.parse().unwrap();
        let plain: Vec<Ipv4Address> = r.iter().collect();
        let mut boxed: Box<dyn AddressEnumerator> = r.boxed_iter();
        let mut seen: Vec<Ipv4Address> = Vec::new();
        while boxed.advance() {
            seen.push(boxed.current().unwrap());
        }
        assert_eq!(seen, plain);
        assert_eq!(boxed.state(), EnumState::Finished);
        boxed.reset();
        assert_eq!(boxed.count(), 8);
    }

    /// The full space ends after its last address without wrapping the offset.
    #[test]
    fn test_full_space_end() {
        let all: Ipv4AddressRange = Ipv4Subnet::parse("0.0.0.0/0").unwrap().all_addresses();
        assert_eq!(all.len(), MAX_RANGE_LEN);
        assert_eq!(all.last(), Ipv4Address::BROADCAST);

        let mut it: Ipv4RangeIter = all.iter();
        assert_eq!(it.next(), Some(Ipv4Address::ANY));
        assert_eq!(it.nth(u32::MAX as usize - 3), Some(ip("255.255.255.253")));
        assert_eq!(it.remaining(), 2);
        assert_eq!(it.next(), Some(ip("255.255.255.254")));
        assert_eq!(it.next(), Some(Ipv4Address::BROADCAST));
        assert_eq!(it.next(), None);
        assert_eq!(it.state(), EnumState::Finished);
        assert_eq!(it.next(), None);
    }

    #[test]
    #[ignore = "walks all 2^32 addresses"]
    fn test_full_space_exhaustive() {
        let all: Ipv4AddressRange = Ipv4Subnet::parse("0.0.0.0/0").unwrap().all_addresses();
        let mut count: u64 = 0;
        let mut it: Ipv4RangeIter = all.iter();
        while it.advance() {
            count += 1;
        }
        assert_eq!(count, MAX_RANGE_LEN);
    }

    #[test]
    fn test_size_hint() {
        let mut it: Ipv4RangeIter = Ipv4AddressRange::parse(SHORT).unwrap().iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        it.next();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.nth(10), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    /// A huge skip finishes the pass instead of wrapping back to the start.
    #[test]
    fn test_nth_huge_skip() {
        let mut it: Ipv4RangeIter = Ipv4AddressRange::parse("10.0.0.0/24").unwrap().iter();
        assert_eq!(it.next(), Some(ip("10.0.0.0")));
        assert_eq!(it.nth(usize::MAX), None);
        assert_eq!(it.state(), EnumState::Finished);
        assert_eq!(it.next(), None);

        let mut it: Ipv4RangeIter = Ipv4AddressRange::parse(SHORT).unwrap().iter();
        assert_eq!(it.nth(usize::MAX), None);
        assert_eq!(it.state(), EnumState::Finished);
    }
}
