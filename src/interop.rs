// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! String-form `serde` support and conversions to/from `ipnet` types.

use super::{
    AddressText, Ipv4Address, Ipv4AddressRange, Ipv4Cidr, Ipv4Subnet, Ipv4SubnetMask,
    Ipv4WildcardMask, Ipv6Address,
};
use ipnet::{Ipv4AddrRange, Ipv4Net};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Serialize through `Display`, deserialize through [AddressText::parse].
macro_rules! impl_serde_text {
    ($($typ:ty),+ $(,)?) => {$(
        impl Serialize for $typ {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $typ {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s: String = String::deserialize(deserializer)?;
                <$typ as AddressText>::parse(&s).map_err(de::Error::custom)
            }
        }
    )+};
}

impl_serde_text!(
    Ipv4Address,
    Ipv6Address,
    Ipv4Cidr,
    Ipv4SubnetMask,
    Ipv4WildcardMask,
    Ipv4Subnet,
    Ipv4AddressRange,
);

/* -------------------------------------------------------------------------- */

impl From<Ipv4Subnet> for Ipv4Net {
    fn from(subnet: Ipv4Subnet) -> Self {
        Ipv4Net::new_assert(subnet.network_address().into(), subnet.prefix_len())
    }
}

/// `ipnet` keeps host bits; they are cleared here.
impl From<Ipv4Net> for Ipv4Subnet {
    fn from(net: Ipv4Net) -> Self {
        Ipv4Subnet::new(net.network().into(), Ipv4Cidr::from(net))
    }
}

impl From<Ipv4Net> for Ipv4Cidr {
    fn from(net: Ipv4Net) -> Self {
        // `Ipv4Net` guarantees a prefix length of at most 32
        Ipv4Cidr::new(net.prefix_len()).unwrap_or(Ipv4Cidr::MAX)
    }
}

impl From<Ipv4AddressRange> for Ipv4AddrRange {
    fn from(range: Ipv4AddressRange) -> Self {
        Ipv4AddrRange::new(range.first().into(), range.last().into())
    }
}

/* -------------------------------------------------------------------------- */
