// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{text::AddressText, AddressError, Ipv4Address, Ipv4AddressRange};
use serde::{Deserialize, Serialize};
use std::{fmt, slice, str::FromStr};
use tracing::{debug, trace};

/// Entry separators accepted by [Ipv4AddressRangeList::parse].
pub const DEFAULT_DELIMITERS: &[char] = &['\n', ','];

/**
An ordered list of address ranges, as written in the source text.

Ranges are neither sorted, merged nor de-duplicated: overlapping entries
stay separate and [Ipv4AddressRangeList::addresses] yields their shared
addresses once per entry.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ipv4AddressRangeList {
    ranges: Vec<Ipv4AddressRange>,
}

impl Ipv4AddressRangeList {
    pub fn new(ranges: Vec<Ipv4AddressRange>) -> Self {
        Ipv4AddressRangeList { ranges }
    }

    /**
    Parse newline or comma separated range entries.

    Each entry is any form accepted by [Ipv4AddressRange]: a single address,
    `a.b.c.d-e`, `a.b.c.d-e.f.g.h` or a subnet. Surrounding whitespace is
    ignored, as are blank entries, so `\r\n` line endings work too.
    */
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        Self::parse_with(text, DEFAULT_DELIMITERS)
    }

    /**
    Like [Ipv4AddressRangeList::parse] with a custom set of delimiters.

    ## Errors
    The first bad entry is reported as [AddressError::ListEntry], whose
    `index` counts delimiter separated pieces from zero, blank ones included
    (for newline-only delimiters, that is the line number).
    */
    pub fn parse_with(text: &str, delimiters: &[char]) -> Result<Self, AddressError> {
        let mut ranges: Vec<Ipv4AddressRange> = Vec::new();
        for (index, entry) in text.split(delimiters).enumerate() {
            let entry: &str = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match Ipv4AddressRange::parse(entry) {
                Ok(range) => {
                    trace!("range list entry #{index}: {range:?}");
                    ranges.push(range);
                }
                Err(source) => {
                    debug!("range list entry #{index} rejected: {source}");
                    return Err(AddressError::ListEntry {
                        index,
                        source: Box::new(source),
                    });
                }
            }
        }
        Ok(Self::new(ranges))
    }

    pub fn ranges(&self) -> &[Ipv4AddressRange] {
        &self.ranges
    }

    /// Per-range iteration.
    pub fn iter(&self) -> slice::Iter<'_, Ipv4AddressRange> {
        self.ranges.iter()
    }

    /// Number of ranges (not addresses).
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Total number of addresses over all ranges, duplicates counted.
    pub fn len(&self) -> u64 {
        self.ranges.iter().map(|r| r.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, addr: Ipv4Address) -> bool {
        self.ranges.iter().any(|r| r.contains(addr))
    }

    /// Every address of every range, in list order.
    pub fn addresses(&self) -> impl Iterator<Item = Ipv4Address> + '_ {
        self.ranges.iter().flat_map(|r| r.iter())
    }
}

impl FromStr for Ipv4AddressRangeList {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Ipv4AddressRangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

impl FromIterator<Ipv4AddressRange> for Ipv4AddressRangeList {
    fn from_iter<I: IntoIterator<Item = Ipv4AddressRange>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Ipv4AddressRange>> for Ipv4AddressRangeList {
    fn from(ranges: Vec<Ipv4AddressRange>) -> Self {
        Self::new(ranges)
    }
}

impl<'a> IntoIterator for &'a Ipv4AddressRangeList {
    type Item = &'a Ipv4AddressRange;
    type IntoIter = slice::Iter<'a, Ipv4AddressRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Ipv4AddressRangeList {
    type Item = Ipv4AddressRange;
    type IntoIter = std::vec::IntoIter<Ipv4AddressRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

/* -------------------------------------------------------------------------- */
