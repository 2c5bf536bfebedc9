// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded numeric token classifiers and the text cursor every parser uses.

use super::strings::DOT;

/**
Length of the decimal octet (0-255) starting at `next`, or 0 if there is none.

`next` holds the upcoming three bytes of input, with end-of-input padded as
`0`. The decision is made from the bytes alone, never by parsing and
backtracking, so a caller can advance its cursor by exactly the returned
count.

A three digit run above 255 is rejected outright (`256` gives 0, not 2),
while a two digit run followed by a non-digit (`29.`) is simply 2. A
leading `0` is always a token of its own.
*/
#[rustfmt::skip]
#[inline]
pub const fn octet_len(next: [u8; 3]) -> usize {
    match next {
        [b'0', ..]                              => 1,
        [b'1', b'0'..=b'9', b'0'..=b'9']        => 3,
        [b'2', b'0'..=b'4', b'0'..=b'9']        => 3,
        [b'2', b'5', b'0'..=b'5']               => 3,
        [b'2'..=b'9', b'0'..=b'9', b'0'..=b'9'] => 0,
        [b'1'..=b'9', b'0'..=b'9', _]           => 2,
        [b'1'..=b'9', ..]                       => 1,
        _                                       => 0,
    }
}

/**
Same policy as [octet_len], bounded at 32 (a CIDR prefix length).

Any three digit run is rejected, so `240` is never read as `24`.
*/
#[rustfmt::skip]
#[inline]
pub const fn prefix_len(next: [u8; 3]) -> usize {
    match next {
        [b'0', ..]                              => 1,
        [b'1'..=b'9', b'0'..=b'9', b'0'..=b'9'] => 0,
        [b'1'..=b'2', b'0'..=b'9', _]           => 2,
        [b'3', b'0'..=b'2', _]                  => 2,
        [b'3'..=b'9', b'0'..=b'9', _]           => 0,
        [b'1'..=b'9', ..]                       => 1,
        _                                       => 0,
    }
}

/// Length and value of the run of up to four hex digits at `next`.
#[inline]
pub const fn hex_group(next: [u8; 4]) -> (usize, u16) {
    let mut len: usize = 0;
    let mut value: u16 = 0;
    while len < 4 {
        let digit: u16 = match next[len] {
            c @ b'0'..=b'9' => (c - b'0') as u16,
            c @ b'a'..=b'f' => (c - b'a' + 10) as u16,
            c @ b'A'..=b'F' => (c - b'A' + 10) as u16,
            _ => break,
        };
        value = value * 16 + digit;
        len += 1;
    }
    (len, value)
}

/// Value of a decimal token already validated by a classifier.
#[inline]
fn decimal_value(digits: &[u8]) -> u8 {
    digits.iter().fold(0u8, |acc, d| acc * 10 + (d - b'0'))
}

/* -------------------------------------------------------------------------- */

/**
A position inside an ASCII input plus the number of bytes consumed so far.

Every `eat_*`/`read_*` method advances only on success and leaves the
cursor untouched on failure. Multi-token reads compose through
[Cursor::attempt], which restores the starting position when the closure
returns `None`.
*/
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a (impl AsRef<[u8]> + ?Sized)) -> Self {
        Cursor {
            input: input.as_ref(),
            pos: 0,
        }
    }

    /// Bytes consumed since construction.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Upcoming `N` bytes, end of input padded with `0`.
    #[inline]
    fn lookahead<const N: usize>(&self) -> [u8; N] {
        let mut out: [u8; N] = [0; N];
        for (slot, b) in out.iter_mut().zip(self.remaining()) {
            *slot = *b;
        }
        out
    }

    /// Run `f`; rewind to the current position if it fails.
    #[inline]
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Cursor<'a>) -> Option<T>) -> Option<T> {
        let saved: usize = self.pos;
        let result: Option<T> = f(self);
        if result.is_none() {
            self.pos = saved;
        }
        result
    }

    /// Consume `c` if it is the next byte.
    #[inline]
    pub fn eat(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume all leading ASCII whitespace; true if anything was consumed.
    pub fn eat_whitespace(&mut self) -> bool {
        let start: usize = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos > start
    }

    /// Decimal octet 0-255.
    pub fn read_octet(&mut self) -> Option<u8> {
        let len: usize = octet_len(self.lookahead());
        self.take_decimal(len)
    }

    /// Decimal prefix length 0-32.
    pub fn read_prefix_len(&mut self) -> Option<u8> {
        let len: usize = prefix_len(self.lookahead());
        self.take_decimal(len)
    }

    /// One to four hex digits.
    pub fn read_hex_group(&mut self) -> Option<u16> {
        let (len, value) = hex_group(self.lookahead());
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(value)
    }

    /// Four octets joined by `.`, most significant first.
    pub fn read_dotted_quad(&mut self) -> Option<[u8; 4]> {
        self.attempt(|c| {
            let mut octets: [u8; 4] = [0; 4];
            for (i, slot) in octets.iter_mut().enumerate() {
                if i > 0 && !c.eat(DOT) {
                    return None;
                }
                *slot = c.read_octet()?;
            }
            Some(octets)
        })
    }

    fn take_decimal(&mut self, len: usize) -> Option<u8> {
        if len == 0 {
            return None;
        }
        let value: u8 = decimal_value(&self.input[self.pos..self.pos + len]);
        self.pos += len;
        Some(value)
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(s: &str) -> [u8; 3] {
        let mut out: [u8; 3] = [0; 3];
        for (slot, b) in out.iter_mut().zip(s.bytes()) {
            *slot = b;
        }
        out
    }

    #[rustfmt::skip]
    #[test]
    fn test_octet_len() {
        let tests: Vec<(&str, usize)> = vec![
            ("0",   1), ("9",   1), ("00",  1), ("01",  1),
            ("10",  2), ("99",  2), ("1.",  1), ("9x",  1),
            ("100", 3), ("199", 3), ("200", 3), ("249", 3),
            ("250", 3), ("255", 3), ("25",  2), ("2",   1),
            ("",    0), (".1",  0), ("a",   0), ("-1",  0),
        ];
        for (input, expected) in tests {
            assert_eq!(octet_len(triple(input)), expected, "Failed: '{input}'");
        }
    }

    /// A three digit run above 255 is rejected, never read as two digits.
    #[test]
    fn test_octet_len_rejects_overflow() {
        assert_eq!(octet_len(triple("256")), 0);
        assert_eq!(octet_len(triple("260")), 0);
        assert_eq!(octet_len(triple("300")), 0);
        assert_eq!(octet_len(triple("999")), 0);
    }

    /// A two digit run ending at a non-digit is a valid two digit octet.
    #[test]
    fn test_octet_len_two_digits_before_junk() {
        assert_eq!(octet_len(triple("29x")), 2);
        assert_eq!(octet_len(triple("26.")), 2);
        assert_eq!(octet_len(triple("99")), 2);
    }

    #[rustfmt::skip]
    #[test]
    fn test_prefix_len() {
        let tests: Vec<(&str, usize)> = vec![
            ("0",   1), ("8",   1), ("24",  2), ("32",  2),
            ("33",  0), ("40",  0), ("4x",  1), ("x4",  0),
            ("24/", 2), ("08",  1), ("",    0),
        ];
        for (input, expected) in tests {
            assert_eq!(prefix_len(triple(input)), expected, "Failed: '{input}'");
        }
    }

    /// A three digit run is rejected, never read as its first two digits.
    #[test]
    fn test_prefix_len_rejects_three_digits() {
        assert_eq!(prefix_len(triple("240")), 0);
        assert_eq!(prefix_len(triple("100")), 0);
        assert_eq!(prefix_len(triple("325")), 0);
        assert_eq!(prefix_len(triple("320")), 0);

        let mut c: Cursor = Cursor::new("240");
        assert_eq!(c.read_prefix_len(), None);
        assert_eq!(c.consumed(), 0);
    }

    #[test]
    fn test_hex_group() {
        assert_eq!(hex_group(*b"db8:"), (3, 0x0db8));
        assert_eq!(hex_group(*b"FFFF"), (4, 0xffff));
        assert_eq!(hex_group(*b"aBc0"), (4, 0xabc0));
        assert_eq!(hex_group(*b"0\0\0\0"), (1, 0));
        assert_eq!(hex_group(*b":1::"), (0, 0));
        assert_eq!(hex_group(*b"g123"), (0, 0));
    }

    #[test]
    fn test_cursor_failures_do_not_advance() {
        let mut c: Cursor = Cursor::new("256.x");
        assert_eq!(c.read_octet(), None);
        assert!(!c.eat(b'.'));
        assert_eq!(c.read_hex_group(), Some(0x256));
        assert_eq!(c.consumed(), 3);
        assert!(c.eat(b'.'));
        assert_eq!(c.read_octet(), None);
        assert_eq!(c.consumed(), 4);
        assert_eq!(c.remaining(), b"x");
    }

    #[test]
    fn test_cursor_attempt_rewinds() {
        let mut c: Cursor = Cursor::new("10.0.0");
        assert_eq!(c.read_dotted_quad(), None);
        assert_eq!(c.consumed(), 0);

        let mut c: Cursor = Cursor::new("10.0.0.1/24");
        assert_eq!(c.read_dotted_quad(), Some([10, 0, 0, 1]));
        assert_eq!(c.consumed(), 8);
        assert!(c.eat(b'/'));
        assert_eq!(c.read_prefix_len(), Some(24));
        assert!(c.is_empty());
    }

    #[test]
    fn test_whitespace() {
        let mut c: Cursor = Cursor::new(" \t\n1");
        assert!(c.eat_whitespace());
        assert!(!c.eat_whitespace());
        assert_eq!(c.consumed(), 3);
        assert_eq!(c.peek(), Some(b'1'));
    }
}
