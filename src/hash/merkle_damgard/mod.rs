pub mod sha1;

/// Length of one compression block in bytes
pub const BLOCK_LENGTH_BYTES: usize = 64;

/// A hash generated from a merkle damgård construction. Implementors only provide the initial chaining value and
/// the compression function; buffering and padding are done by the streaming state on top of them.
pub trait MerkleDamgardHash: Sized + Copy {
    const INITIAL: Self;

    /// Fold exactly one full block of message data into the chaining value.
    fn round_function(&mut self, input_block: &[u8; BLOCK_LENGTH_BYTES]);
}

/// Accumulates message bytes until a full block can be compressed. The fill length is tracked explicitly and all
/// writes go through `append`, so no write can ever run past the end of the block.
#[derive(Debug, Clone)]
pub struct BlockBuffer {
    data: [u8; BLOCK_LENGTH_BYTES],
    length: usize,
}

impl BlockBuffer {
    pub const fn new() -> BlockBuffer {
        BlockBuffer { data: [0_u8; BLOCK_LENGTH_BYTES], length: 0 }
    }

    /// Number of valid bytes currently buffered.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn is_full(&self) -> bool {
        self.length == BLOCK_LENGTH_BYTES
    }

    /// Number of bytes that can still be appended before the block is full.
    pub fn remaining(&self) -> usize {
        BLOCK_LENGTH_BYTES - self.length
    }

    /// Copy as many bytes of `input` as fit into the block and return how many were copied.
    pub fn append(&mut self, input: &[u8]) -> usize {
        let count = usize::min(self.remaining(), input.len());
        self.data[self.length..self.length + count].copy_from_slice(&input[..count]);
        self.length += count;
        count
    }

    /// Append `count` zero bytes. `count` must not exceed `remaining()`.
    pub fn append_zeros(&mut self, count: usize) {
        assert!(count <= self.remaining());
        let zeros = [0_u8; BLOCK_LENGTH_BYTES];
        self.append(&zeros[..count]);
    }

    /// The whole block. Only meaningful if `is_full()`.
    pub fn block(&self) -> &[u8; BLOCK_LENGTH_BYTES] {
        &self.data
    }

    /// Reset the fill length, so the next append starts at offset 0 again.
    pub fn clear(&mut self) {
        self.length = 0;
    }
}

impl Default for BlockBuffer {
    fn default() -> Self {
        BlockBuffer::new()
    }
}
