// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) const DOT: u8 = b'.';
pub(crate) const COLON: u8 = b':';
pub(crate) const DASH: u8 = b'-';
pub(crate) const SLASH: u8 = b'/';

// error.rs
pub(crate) static ERR_INVALID: &str = "invalid";
pub(crate) static ERR_MASK: &str = "subnet mask bits are not contiguous";
pub(crate) static ERR_WILDCARD: &str = "wildcard mask bits are not contiguous";
pub(crate) static ERR_PREFIX: &str = "prefix length must be <= 32, got";
pub(crate) static ERR_OCTET_INDEX: &str = "octet index must be 0..=3, got";
pub(crate) static ERR_SLICE: &str = "slice out of bounds";
pub(crate) static ERR_RNG_COUNT: &str = "range address count must be 1..=4294967296, got";
pub(crate) static ERR_RNG_OVERFLOW: &str = "range runs past 255.255.255.255";
pub(crate) static ERR_RNG_ORDER: &str = "range start is greater than range end";
pub(crate) static ERR_BUF_SHORT: &str = "byte buffer too short";
pub(crate) static ERR_LIST_ENTRY: &str = "invalid range list entry";

// type names used in parse errors
pub(crate) static NAME_V4: &str = "IPv4 address";
pub(crate) static NAME_V6: &str = "IPv6 address";
pub(crate) static NAME_CIDR: &str = "IPv4 prefix length";
pub(crate) static NAME_MASK: &str = "IPv4 subnet mask";
pub(crate) static NAME_WILDCARD: &str = "IPv4 wildcard mask";
pub(crate) static NAME_SUBNET: &str = "IPv4 subnet";
pub(crate) static NAME_RANGE: &str = "IPv4 address range";
