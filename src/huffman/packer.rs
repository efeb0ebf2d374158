use std::io::{self, Write};

use bitvec::prelude::*;

/// Packs single bits into bytes and writes them to `W`.
///
/// The first bit of each byte is stored in its least significant position and the following
/// ones move toward the most significant position. A byte is written as soon as it holds 8 bits;
/// [`finish`](Self::finish) writes the last partial byte, if any, with its unused high bits set
/// to zero.
pub struct BitPacker<W: Write> {
    writer: W,

    /// The bits of the byte being filled.
    current: u8,

    /// How many bits of `current` are in use.
    filled: u32,

    /// The total number of bits pushed so far.
    bits_written: usize,
}

impl<W: Write> BitPacker<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current: 0,
            filled: 0,
            bits_written: 0,
        }
    }

    pub fn push(&mut self, bit: bool) -> io::Result<()> {
        self.current |= (bit as u8) << self.filled;
        self.filled += 1;
        self.bits_written += 1;

        if self.filled == u8::BITS {
            self.writer.write_all(&[self.current])?;
            self.current = 0;
            self.filled = 0;
        }
        Ok(())
    }

    pub fn extend(&mut self, bits: &BitSlice) -> io::Result<()> {
        bits.iter().by_vals().try_for_each(|bit| self.push(bit))
    }

    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// Writes the pending partial byte and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.filled > 0 {
            self.writer.write_all(&[self.current])?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Packs `bits` into `ceil(bits.len() / 8)` bytes.
pub fn pack(bits: &BitSlice) -> Vec<u8> {
    let mut out = Vec::with_capacity(bits.len().div_ceil(8));

    for chunk in bits.chunks(u8::BITS as usize) {
        out.push(
            chunk
                .iter()
                .by_vals()
                .enumerate()
                .fold(0u8, |byte, (position, bit)| byte | ((bit as u8) << position)),
        );
    }
    out
}
