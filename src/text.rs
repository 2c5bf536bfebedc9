// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{scanner::Cursor, AddressError};
use std::fmt::{self, Write};
use tracing::debug;

/// Size of the stack buffer used when formatting; larger than any `MAX_TEXT_LEN`.
pub const TEXT_BUF_LEN: usize = 64;

/**
Shared parse/format capability of the fixed-size textual types.

Implementors only provide [AddressText::read], a prefix reader over a
[Cursor], plus a [fmt::Display] that never exceeds `MAX_TEXT_LEN` bytes.
The strict, prefix and buffer-formatting entry points are derived from
those two.
*/
pub trait AddressText: Sized + fmt::Display {
    /// Longest text `Display` can produce.
    const MAX_TEXT_LEN: usize;
    /// Human-readable name, used in parse errors.
    const NAME: &'static str;

    /**
    Read a value from the front of `cursor`.

    Must leave the cursor where it was when returning `None`. Wrapping the
    body in [Cursor::attempt] is the simple way to guarantee that.
    */
    fn read(cursor: &mut Cursor<'_>) -> Option<Self>;

    /// Parse a leading value, returning it with the number of bytes consumed.
    fn try_parse_prefix(s: &(impl AsRef<[u8]> + ?Sized)) -> Option<(Self, usize)> {
        let mut cursor: Cursor = Cursor::new(s);
        let value: Self = Self::read(&mut cursor)?;
        Some((value, cursor.consumed()))
    }

    /// Parse `s`, which must hold exactly one value and nothing else.
    fn try_parse(s: &(impl AsRef<[u8]> + ?Sized)) -> Option<Self> {
        let mut cursor: Cursor = Cursor::new(s);
        let value: Self = Self::read(&mut cursor)?;
        cursor.is_empty().then_some(value)
    }

    /// Strict parse, reporting [AddressError::Invalid] on failure.
    fn parse(s: &(impl AsRef<[u8]> + ?Sized)) -> Result<Self, AddressError> {
        Self::try_parse(s).ok_or_else(|| {
            let err: AddressError = AddressError::invalid(Self::NAME, s);
            debug!("{err}");
            err
        })
    }

    /**
    Write the canonical text into `dst`, returning the number of bytes written.

    Returns `None` and leaves `dst` untouched if it is too short.
    */
    fn try_format(&self, dst: &mut [u8]) -> Option<usize> {
        let mut buf: TextBuf = TextBuf::new();
        write!(buf, "{self}").ok()?;
        let text: &[u8] = buf.as_bytes();
        if dst.len() < text.len() {
            return None;
        }
        dst[..text.len()].copy_from_slice(text);
        Some(text.len())
    }
}

/* -------------------------------------------------------------------------- */

/// Fixed stack buffer implementing [fmt::Write]; writes past capacity fail.
pub struct TextBuf {
    buf: [u8; TEXT_BUF_LEN],
    len: usize,
}

impl TextBuf {
    pub const fn new() -> Self {
        TextBuf {
            buf: [0; TEXT_BUF_LEN],
            len: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_str(&self) -> &str {
        // only ever filled through `write_str`
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl Default for TextBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for TextBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end: usize = self.len + s.len();
        if end > TEXT_BUF_LEN {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// `FromStr` through [AddressText::parse] for each listed type.
macro_rules! impl_from_str {
    ($($typ:ty),+ $(,)?) => {$(
        impl std::str::FromStr for $typ {
            type Err = $crate::AddressError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$typ as $crate::AddressText>::parse(s)
            }
        }
    )+};
}

pub(crate) use impl_from_str;

/* -------------------------------------------------------------------------- */
