//! Conversions between byte slices and big endian words. SHA-1 reads its message schedule and writes
//! both the length field and the final digest in network byte order, independent of the host.

use byteorder::{BigEndian, ByteOrder};

/// Decodes the ``source`` slice into the ``dest`` array, treating every four bytes as one big endian
/// double-word. ``source`` must be at least four times bigger than ``dest``.
pub(crate) fn read_u32a_be(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);
    BigEndian::read_u32_into(&source[..dest.len() * 4], dest);
}

/// Encodes all words of ``source`` into the ``dest`` slice as big endian double-words. ``dest`` must be
/// exactly four times bigger than ``source``.
pub(crate) fn write_u32a_be(dest: &mut [u8], source: &[u32]) {
    assert_eq!(dest.len(), source.len() * 4);
    BigEndian::write_u32_into(source, dest);
}

/// Writes a single quad-word into the first eight bytes of ``dest`` in big endian byte order.
pub(crate) fn write_u64_be(dest: &mut [u8], value: u64) {
    BigEndian::write_u64(dest, value)
}
