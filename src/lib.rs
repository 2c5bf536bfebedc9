// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Exact parsing, formatting and arithmetic for IPv4/IPv6 addresses, subnet
masks, CIDR prefixes, subnets and textual address range lists.

Every fixed-size type implements [AddressText], giving it:
- `parse` / `try_parse`: the whole input must be one value
- `try_parse_prefix`: parse a leading value and report bytes consumed
- `try_format`: canonical text into a caller buffer, no partial writes

```
use ipkit::{AddressText, Ipv4Address, Ipv4AddressRangeList, Ipv4Subnet};

let net = Ipv4Subnet::parse("10.0.0.0/24").unwrap();
assert_eq!(net.usable_hosts(), 254);
assert!(Ipv4Address::parse("10.0.0.77").unwrap().is_in_subnet(&net));

let list = Ipv4AddressRangeList::parse("10.0.0.2-5\n10.100.0.100/29").unwrap();
assert_eq!(list.addresses().count(), 12);
```
*/

mod error;
mod interop;
mod ipv4;
mod ipv6;
mod mask;
mod range;
mod rangelist;
pub mod scanner;
mod strings;
mod subnet;
mod text;

pub use error::AddressError;
pub use ipv4::Ipv4Address;
pub use ipv6::Ipv6Address;
pub use mask::{Ipv4Cidr, Ipv4SubnetMask, Ipv4WildcardMask};
pub use range::{AddressEnumerator, EnumState, Ipv4AddressRange, Ipv4RangeIter, MAX_RANGE_LEN};
pub use rangelist::{Ipv4AddressRangeList, DEFAULT_DELIMITERS};
pub use scanner::Cursor;
pub use subnet::Ipv4Subnet;
pub use text::{AddressText, TextBuf, TEXT_BUF_LEN};

pub(crate) const IPV4_BITS: u8 = 32;
