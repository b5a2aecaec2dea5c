/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Variable-length encoding for unsigned integers.
//!
//! # Encoding scheme
//!
//! Each integer is split into 7-bit groups, least significant group first.
//! Every group is stored in one byte whose most-significant bit is the
//! **continuation bit**: 1 if another block follows, 0 on the last block.
//!
//! 300 (`0b1_0010_1100`) is stored as two blocks:
//!
//! ```text
//! 1010 1100   0000 0010
//! ^           ^
//! continue    last block
//! ```
//!
//! Small values, which dominate snapshots (attendance counts, student IDs),
//! take a single byte.

use std::io::{self, Read};

/// A convenient function to read a varint-encoded integer from the given reader.
pub fn read<T, R>(reader: &mut R) -> io::Result<T>
where
    R: Read,
    T: VarintEncode,
{
    T::read_as_varint(reader)
}

/// Utilities to varint encode/decode an integer.
pub trait VarintEncode: Sized {
    /// Append the varint encoding of `self` to `out`.
    /// It returns the number of bytes written.
    fn write_as_varint(self, out: &mut Vec<u8>) -> usize;

    /// Read a varint-encoded integer from the given reader.
    ///
    /// Fails with [`io::ErrorKind::UnexpectedEof`] if the reader runs out
    /// mid-integer, and with [`io::ErrorKind::InvalidData`] if the encoded
    /// value doesn't fit in `Self`.
    fn read_as_varint<R: Read>(reader: &mut R) -> io::Result<Self>;
}

macro_rules! impl_encode {
    ($ty:ident) => {
        impl VarintEncode for $ty {
            fn write_as_varint(mut self, out: &mut Vec<u8>) -> usize {
                let mut written = 0;
                loop {
                    let block = (self & 0b0111_1111) as u8;
                    self >>= 7;
                    written += 1;
                    if self == 0 {
                        out.push(block);
                        return written;
                    }
                    out.push(block | 0b1000_0000);
                }
            }

            fn read_as_varint<R: Read>(reader: &mut R) -> io::Result<Self> {
                let mut value: $ty = 0;
                let mut shift = 0u32;
                loop {
                    let mut byte = [0u8; 1];
                    reader.read_exact(&mut byte)?;
                    let block = $ty::from(byte[0] & 0b0111_1111);

                    // Reject blocks whose bits would be shifted out of `Self`.
                    if shift >= $ty::BITS || (block << shift) >> shift != block {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            concat!("varint overflows ", stringify!($ty)),
                        ));
                    }
                    value |= block << shift;

                    if byte[0] & 0b1000_0000 == 0 {
                        return Ok(value);
                    }
                    shift += 7;
                }
            }
        }
    };
}

impl_encode!(u32);
impl_encode!(u64);
