//! A streaming software implementation of SHA-1. Messages are fed in chunks of arbitrary size into a
//! [`SHA1Hasher`](hash::merkle_damgard::sha1::SHA1Hasher), which compresses every full 64 byte block as soon as it is
//! complete and pads the message once the digest is requested.
//!
//! SHA-1 is broken with respect to collision resistance. Use it for interoperability with existing formats only.
#![allow(clippy::needless_return)]

pub mod array_util;
pub mod error;
pub mod hash;

pub use error::DigestError;
pub use hash::{HashFunction, HashValue};
pub use hash::merkle_damgard::sha1::{SHA1Hash, SHA1Hasher};
