// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, Ipv4Address};
use std::{error, fmt};

/**
Every failure this crate reports.

`Invalid` is the "malformed input" case produced by strict `parse` entry
points. All other variants are raised at construction/accessor boundaries
after text has already been understood (bad mask bits, bad index, etc).

Note that a family mismatch (IPv6 text given to the IPv4 parser, or a
`SocketAddr::V6` given to [Ipv4Address::try_from_socket_addr]) is not an
error at all: those entry points return `None`.
*/
#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// text is not a valid `what`
    Invalid { what: &'static str, input: String },
    InvalidMask(u32),
    InvalidWildcard(u32),
    InvalidPrefix(u8),
    OctetIndex(usize),
    SliceBounds { start: u64, len: u64, total: u64 },
    RangeCount(u64),
    RangeOverflow { start: Ipv4Address, count: u64 },
    RangeOrder(Ipv4Address, Ipv4Address),
    BufferTooShort { need: usize, got: usize },
    /// a range list entry failed; `index` is zero-based in source order
    ListEntry { index: usize, source: Box<AddressError> },
}

impl AddressError {
    pub(crate) fn invalid(what: &'static str, input: impl AsRef<[u8]>) -> Self {
        AddressError::Invalid {
            what,
            input: String::from_utf8_lossy(input.as_ref()).into_owned(),
        }
    }

    /// True for malformed-text failures (including those inside a range list).
    pub fn is_parse_error(&self) -> bool {
        match self {
            AddressError::Invalid { .. } => true,
            AddressError::ListEntry { source, .. } => source.is_parse_error(),
            _ => false,
        }
    }

    /// True for failures raised on values rather than on text.
    pub fn is_invalid_argument(&self) -> bool {
        !self.is_parse_error()
    }
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Invalid { what, input } => {
                write!(f, "{ERR_INVALID} {what}: '{input}'")
            }
            AddressError::InvalidMask(bits) => {
                write!(f, "{ERR_MASK}: {}", Ipv4Address::from_bits(*bits))
            }
            AddressError::InvalidWildcard(bits) => {
                write!(f, "{ERR_WILDCARD}: {}", Ipv4Address::from_bits(*bits))
            }
            AddressError::InvalidPrefix(val) => {
                write!(f, "{ERR_PREFIX} {val}")
            }
            AddressError::OctetIndex(idx) => {
                write!(f, "{ERR_OCTET_INDEX} {idx}")
            }
            AddressError::SliceBounds { start, len, total } => {
                write!(f, "{ERR_SLICE}: {start} + {len} > {total}")
            }
            AddressError::RangeCount(count) => {
                write!(f, "{ERR_RNG_COUNT} {count}")
            }
            AddressError::RangeOverflow { start, count } => {
                write!(f, "{ERR_RNG_OVERFLOW} ({count} addresses from {start})")
            }
            AddressError::RangeOrder(first, last) => {
                write!(f, "{ERR_RNG_ORDER} ({first} > {last})")
            }
            AddressError::BufferTooShort { need, got } => {
                write!(f, "{ERR_BUF_SHORT}: need {need} bytes, got {got}")
            }
            AddressError::ListEntry { index, source } => {
                write!(f, "{ERR_LIST_ENTRY} #{index}: {source}")
            }
        }
    }
}

impl error::Error for AddressError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AddressError::ListEntry { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/* -------------------------------------------------------------------------- */
