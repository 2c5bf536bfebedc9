// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    scanner::Cursor,
    strings::*,
    text::{impl_from_str, AddressText},
    AddressError, Ipv4Address,
};
use std::{
    fmt,
    net::{IpAddr, Ipv6Addr, SocketAddr},
};

const GROUPS: usize = 8;

/**
An IPv6 address as two 64-bit halves, `high` holding the first eight bytes
of the address in network order.

Field order makes the derived ordering equal to the 128-bit numeric order.
*/
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Ipv6Address {
    high: u64,
    low: u64,
}

impl Ipv6Address {
    /// `::`
    pub const UNSPECIFIED: Self = Ipv6Address { high: 0, low: 0 };
    /// `::1`
    pub const LOCALHOST: Self = Ipv6Address { high: 0, low: 1 };
    /// Length of `ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff`.
    pub const MAXIMUM_LENGTH_REQUIRED: usize = 39;

    pub const fn from_halves(high: u64, low: u64) -> Self {
        Ipv6Address { high, low }
    }

    pub const fn high(self) -> u64 {
        self.high
    }

    pub const fn low(self) -> u64 {
        self.low
    }

    pub const fn from_bits(bits: u128) -> Self {
        Ipv6Address {
            high: (bits >> 64) as u64,
            low: bits as u64,
        }
    }

    pub const fn to_bits(self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }

    pub const fn from_segments(segments: [u16; 8]) -> Self {
        let mut bits: u128 = 0;
        let mut i: usize = 0;
        while i < GROUPS {
            bits = (bits << 16) | segments[i] as u128;
            i += 1;
        }
        Self::from_bits(bits)
    }

    pub const fn segments(self) -> [u16; 8] {
        let bits: u128 = self.to_bits();
        let mut out: [u16; 8] = [0; 8];
        let mut i: usize = 0;
        while i < GROUPS {
            out[i] = (bits >> (16 * (GROUPS - 1 - i))) as u16;
            i += 1;
        }
        out
    }

    pub const fn from_octets(octets: [u8; 16]) -> Self {
        Self::from_bits(u128::from_be_bytes(octets))
    }

    pub const fn octets(self) -> [u8; 16] {
        self.to_bits().to_be_bytes()
    }

    /// Read the first sixteen bytes of `bytes` in network order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        match bytes.first_chunk::<16>() {
            Some(octets) => Ok(Self::from_octets(*octets)),
            None => Err(AddressError::BufferTooShort {
                need: 16,
                got: bytes.len(),
            }),
        }
    }

    /// `None` unless `addr` is an IPv6 socket address.
    pub fn try_from_socket_addr(addr: &SocketAddr) -> Option<Self> {
        match addr {
            SocketAddr::V6(v6) => Some(Self::from(*v6.ip())),
            SocketAddr::V4(_) => None,
        }
    }

    /// `None` unless `addr` is an IPv6 address.
    pub fn try_from_ip_addr(addr: IpAddr) -> Option<Self> {
        match addr {
            IpAddr::V6(v6) => Some(Self::from(v6)),
            IpAddr::V4(_) => None,
        }
    }

    /// `::ffff:a.b.c.d`
    pub const fn from_ipv4_mapped(addr: Ipv4Address) -> Self {
        Ipv6Address {
            high: 0,
            low: 0xffff_0000_0000 | addr.to_bits() as u64,
        }
    }

    /// The embedded address if this is an IPv4-mapped address.
    pub const fn to_ipv4_mapped(self) -> Option<Ipv4Address> {
        if self.high == 0 && self.low >> 32 == 0xffff {
            Some(Ipv4Address::from_bits(self.low as u32))
        } else {
            None
        }
    }
}

/**
Read up to `groups.len()` colon separated groups into `groups`.

While at least two slots remain, a dotted-quad IPv4 literal is tried first
and, when found, fills two slots and ends the run. Returns the number of
slots filled and whether the run ended with an IPv4 literal.
*/
fn read_groups(c: &mut Cursor<'_>, groups: &mut [u16]) -> (usize, bool) {
    let limit: usize = groups.len();
    for i in 0..limit {
        if i + 1 < limit {
            let quad: Option<[u8; 4]> = c.attempt(|c| {
                if i > 0 && !c.eat(COLON) {
                    return None;
                }
                c.read_dotted_quad()
            });
            if let Some([a, b, cc, d]) = quad {
                groups[i] = u16::from_be_bytes([a, b]);
                groups[i + 1] = u16::from_be_bytes([cc, d]);
                return (i + 2, true);
            }
        }

        let group: Option<u16> = c.attempt(|c| {
            if i > 0 && !c.eat(COLON) {
                return None;
            }
            c.read_hex_group()
        });
        match group {
            Some(g) => groups[i] = g,
            None => return (i, false),
        }
    }
    (limit, false)
}

impl AddressText for Ipv6Address {
    const MAX_TEXT_LEN: usize = Self::MAXIMUM_LENGTH_REQUIRED;
    const NAME: &'static str = NAME_V6;

    fn read(cursor: &mut Cursor<'_>) -> Option<Self> {
        cursor.attempt(|c| {
            let mut head: [u16; 8] = [0; 8];
            let (head_len, head_quad) = read_groups(c, &mut head);
            if head_len == GROUPS {
                return Some(Self::from_segments(head));
            }
            // an IPv4 literal can only be the very last thing
            if head_quad {
                return None;
            }

            c.attempt(|c| (c.eat(COLON) && c.eat(COLON)).then_some(()))?;

            // `::` stands for at least one group
            let mut tail: [u16; 7] = [0; 7];
            let limit: usize = GROUPS - (head_len + 1);
            let (tail_len, _) = read_groups(c, &mut tail[..limit]);

            head[GROUPS - tail_len..].copy_from_slice(&tail[..tail_len]);
            Some(Self::from_segments(head))
        })
    }
}

impl_from_str!(Ipv6Address);

/// Leftmost longest run of zero groups, as (start, len).
fn longest_zero_run(segments: &[u16; 8]) -> (usize, usize) {
    let mut best: (usize, usize) = (0, 0);
    let mut current: (usize, usize) = (0, 0);
    for (i, seg) in segments.iter().enumerate() {
        if *seg == 0 {
            if current.1 == 0 {
                current.0 = i;
            }
            current.1 += 1;
            if current.1 > best.1 {
                best = current;
            }
        } else {
            current.1 = 0;
        }
    }
    best
}

fn fmt_groups(f: &mut fmt::Formatter<'_>, groups: &[u16]) -> fmt::Result {
    for (i, g) in groups.iter().enumerate() {
        if i > 0 {
            f.write_str(":")?;
        }
        write!(f, "{g:x}")?;
    }
    Ok(())
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments: [u16; 8] = self.segments();
        let (start, len) = longest_zero_run(&segments);
        if len < 2 {
            return fmt_groups(f, &segments);
        }
        fmt_groups(f, &segments[..start])?;
        f.write_str("::")?;
        fmt_groups(f, &segments[start + len..])
    }
}

impl fmt::Debug for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self::from_bits(u128::from(addr))
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(addr: Ipv6Address) -> Self {
        Ipv6Addr::from(addr.to_bits())
    }
}

impl From<u128> for Ipv6Address {
    fn from(bits: u128) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Ipv6Address> for u128 {
    fn from(addr: Ipv6Address) -> Self {
        addr.to_bits()
    }
}

/* -------------------------------------------------------------------------- */
