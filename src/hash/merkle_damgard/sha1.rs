#![allow(clippy::unreadable_literal)]

use log::{debug, trace};

use crate::array_util::{read_u32a_be, write_u32a_be, write_u64_be};
use crate::error::DigestError;
use crate::hash::{HashFunction, HashValue};
use crate::hash::merkle_damgard::{BLOCK_LENGTH_BYTES, BlockBuffer, MerkleDamgardHash};

const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

/// number of rounds, and therefore words in the expanded message schedule
const ROUND_COUNT: usize = 80;

/// offset of the 64 bit message length within the last padded block
const LENGTH_FIELD_OFFSET: usize = BLOCK_LENGTH_BYTES - 8;

/// Length of a SHA1 digest in bytes
pub const OUTPUT_LENGTH_BYTES: usize = 20;

/// The initial state for any SHA1 hash. From here, all blocks are applied.
pub const INITIAL: SHA1Hash = SHA1Hash {
    a: 0x67452301,
    b: 0xEFCDAB89,
    c: 0x98BADCFE,
    d: 0x10325476,
    e: 0xC3D2E1F0,
};

/// A SHA1 hash state. It consists mainly out of 5 double-words named `a`, `b`, `c`, `d` and `e`. Once the
/// message is finalized, this is the digest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SHA1Hash {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
}

impl SHA1Hash {
    /// The five state words in order `a` to `e`.
    pub fn words(&self) -> [u32; 5] {
        [self.a, self.b, self.c, self.d, self.e]
    }

    /// Generates the raw `[u8; 20]` digest. Every word is serialized big endian, regardless of the host.
    pub fn to_raw(&self) -> [u8; OUTPUT_LENGTH_BYTES] {
        let mut raw = [0_u8; OUTPUT_LENGTH_BYTES];
        write_u32a_be(&mut raw, &self.words());
        raw
    }
}

impl MerkleDamgardHash for SHA1Hash {
    const INITIAL: Self = INITIAL;

    fn round_function(&mut self, input_block: &[u8; BLOCK_LENGTH_BYTES]) {
        let mut extended_block = [0_u32; ROUND_COUNT];
        read_u32a_be(&mut extended_block[..BLOCK_LENGTH_DOUBLE_WORDS], input_block);

        for i in BLOCK_LENGTH_DOUBLE_WORDS..ROUND_COUNT {
            extended_block[i] = u32::rotate_left(
                extended_block[i - 3]
                    ^ extended_block[i - 8]
                    ^ extended_block[i - 14]
                    ^ extended_block[i - 16],
                1,
            )
        }

        let mut round_state = *self;

        for (i, data_word) in extended_block.iter().enumerate() {
            let (scrambled_data, magic_constant) = match i {
                0..=19 => (
                    (round_state.b & round_state.c) | ((!round_state.b) & round_state.d),
                    0x5A827999,
                ),
                20..=39 => (round_state.b ^ round_state.c ^ round_state.d, 0x6ED9EBA1),
                40..=59 => (
                    (round_state.b & round_state.c)
                        | (round_state.b & round_state.d)
                        | (round_state.c & round_state.d),
                    0x8F1BBCDC,
                ),
                60..=79 => (round_state.b ^ round_state.c ^ round_state.d, 0xCA62C1D6),
                _ => unreachable!(),
            };

            let temp = u32::rotate_left(round_state.a, 5)
                .wrapping_add(round_state.e)
                .wrapping_add(*data_word)
                .wrapping_add(magic_constant)
                .wrapping_add(scrambled_data);
            round_state.e = round_state.d;
            round_state.d = round_state.c;
            round_state.c = u32::rotate_left(round_state.b, 30);
            round_state.b = round_state.a;
            round_state.a = temp;
        }

        self.a = self.a.wrapping_add(round_state.a);
        self.b = self.b.wrapping_add(round_state.b);
        self.c = self.c.wrapping_add(round_state.c);
        self.d = self.d.wrapping_add(round_state.d);
        self.e = self.e.wrapping_add(round_state.e);
    }
}

impl HashValue for SHA1Hash {
    fn raw(&self) -> Vec<u8> {
        self.to_raw().to_vec()
    }
}

impl HashFunction for SHA1Hash {
    const BLOCK_SIZE: usize = BLOCK_LENGTH_BYTES;

    const OUTPUT_SIZE: usize = OUTPUT_LENGTH_BYTES;

    fn digest_message(input: &[u8]) -> Self {
        let mut hasher = SHA1Hasher::new();
        hasher.absorb(input);
        hasher.finalize_and_get()
    }
}

impl From<SHA1Hash> for [u8; OUTPUT_LENGTH_BYTES] {
    fn from(hash: SHA1Hash) -> Self {
        hash.to_raw()
    }
}

/// Streaming SHA1 computation. Data is fed in chunks of arbitrary size using `update`; the digest is computed by
/// `finalize_and_get`, after which the state is frozen and rejects further input.
///
/// Feeding a message in several chunks yields the same digest as feeding it at once.
#[derive(Debug, Clone)]
pub struct SHA1Hasher {
    hash: SHA1Hash,
    buffer: BlockBuffer,
    /// length of all data ever absorbed, in bits
    message_length: u64,
    finalized: bool,
}

impl SHA1Hasher {
    pub fn new() -> SHA1Hasher {
        SHA1Hasher { hash: SHA1Hash::INITIAL, buffer: BlockBuffer::new(), message_length: 0, finalized: false }
    }

    /// Append `input` to the message. Every time the internal block fills up, it is compressed into the hash
    /// state, so a single call may run any number of compression rounds.
    ///
    /// # Errors
    /// `DigestError::AlreadyFinalized` if the digest has already been computed, even if `input` is empty.
    pub fn update(&mut self, input: &[u8]) -> Result<&mut Self, DigestError> {
        if self.finalized {
            debug!("rejected {} bytes of input to a finalized sha-1 state", input.len());
            return Err(DigestError::AlreadyFinalized);
        }

        self.absorb(input);
        Ok(self)
    }

    fn absorb(&mut self, input: &[u8]) {
        let mut remaining_input = input;

        while !remaining_input.is_empty() {
            let copied = self.buffer.append(remaining_input);
            self.message_length = self.message_length.wrapping_add((copied as u64) << 3);
            remaining_input = &remaining_input[copied..];

            if self.buffer.is_full() {
                self.compress_buffer();
            }
        }
    }

    fn compress_buffer(&mut self) {
        debug_assert!(self.buffer.is_full());
        trace!("compressing sha-1 block, {} message bits absorbed", self.message_length);

        self.hash.round_function(self.buffer.block());
        self.buffer.clear();
    }

    /// Finalize the message if that did not happen yet and return the digest. Repeated calls return the same
    /// digest without recomputing it.
    pub fn finalize_and_get(&mut self) -> SHA1Hash {
        if !self.finalized {
            self.pad_and_finalize();
        }

        self.hash
    }

    /// Alias of `finalize_and_get`.
    pub fn finish(&mut self) -> SHA1Hash {
        self.finalize_and_get()
    }

    /// Return the digest of an already finalized state. Finalization mutates the state, thus it cannot happen here.
    ///
    /// # Errors
    /// `DigestError::NotFinalized` if `finalize_and_get` was never called on this state.
    pub fn get_if_finalized(&self) -> Result<SHA1Hash, DigestError> {
        if self.finalized {
            Ok(self.hash)
        } else {
            Err(DigestError::NotFinalized)
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Number of message bits absorbed so far. Padding does not count.
    pub fn message_length(&self) -> u64 {
        self.message_length
    }

    /// Number of bytes waiting in the internal block for the next compression round.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    fn pad_and_finalize(&mut self) {
        // the buffer is never full between calls, so there is room for at least the 0x80 byte
        self.buffer.append(&[0x80]);

        // no room for the length field: compress a zero-padded block and continue in a fresh one
        let spilled = self.buffer.len() > LENGTH_FIELD_OFFSET;
        if spilled {
            let padding = self.buffer.remaining();
            self.buffer.append_zeros(padding);
            self.compress_buffer();
        }

        let padding = LENGTH_FIELD_OFFSET - self.buffer.len();
        self.buffer.append_zeros(padding);

        let mut length_field = [0_u8; 8];
        write_u64_be(&mut length_field, self.message_length);
        self.buffer.append(&length_field);

        debug!("finalizing sha-1 of {} bits, padding spilled into a second block: {}", self.message_length, spilled);

        self.compress_buffer();
        self.finalized = true;
    }
}

impl Default for SHA1Hasher {
    fn default() -> Self {
        SHA1Hasher::new()
    }
}
