// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Firmware content digest.
//!
//! MD5 is kept for compatibility with the update consumer, which compares it
//! after download. It is an integrity check only.

use std::io::Read;

/// Read size used when streaming a firmware image through the hasher.
pub const HASH_CHUNK_SIZE: usize = 64 * 1024;

/// Size and MD5 digest of a firmware image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirmwareDigest {
    /// Exact number of bytes hashed.
    pub size: u64,
    /// Lowercase hex MD5, 32 characters.
    pub md5: String,
}

impl FirmwareDigest {
    /// Digest an in-memory image.
    pub fn of_bytes(data: &[u8]) -> Self {
        Self {
            size: data.len() as u64,
            md5: format!("{:x}", md5::compute(data)),
        }
    }

    /// Digest everything `reader` yields, in `HASH_CHUNK_SIZE` pieces.
    pub fn of_reader<R: Read>(mut reader: R) -> std::io::Result<Self> {
        let mut ctx = md5::Context::new();
        let mut buf = vec![0u8; HASH_CHUNK_SIZE];
        let mut size = 0u64;

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            ctx.consume(&buf[..n]);
            size += n as u64;
        }

        Ok(Self {
            size,
            md5: format!("{:x}", ctx.compute()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let digest = FirmwareDigest::of_bytes(&[]);
        assert_eq!(digest.size, 0);
        assert_eq!(digest.md5, "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_known_vector() {
        let digest = FirmwareDigest::of_bytes(b"The quick brown fox jumps over the lazy dog");
        assert_eq!(digest.md5, "9e107d9d372bb6826bd81d3542a419d6");
        assert_eq!(digest.size, 43);
    }

    #[test]
    fn test_streaming_matches_buffered() {
        // Spans several chunks with a ragged tail
        let data: Vec<u8> = (0..(HASH_CHUNK_SIZE * 3 + 17))
            .map(|i| (i % 251) as u8)
            .collect();
        let streamed = FirmwareDigest::of_reader(&data[..]).unwrap();
        assert_eq!(streamed, FirmwareDigest::of_bytes(&data));
        assert_eq!(streamed.size, data.len() as u64);
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let digest = FirmwareDigest::of_bytes(&[0xFF; 100]);
        assert_eq!(digest.md5.len(), 32);
        assert!(digest
            .md5
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
