use md5::{Digest, Md5};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, QuoteGifError};

const SAMPLE_SIZE: u64 = 64 * 1024;

/// Compute the lookup key the captioning service expects for a video file:
/// an MD5 digest over the first and last 64 KiB of the raw bytes,
/// concatenated in that order, rendered as lowercase hex.
///
/// The two samples must not overlap, so files under 128 KiB are rejected
/// rather than silently hashed over truncated reads.
pub fn fingerprint_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let mut file = File::open(path)
        .map_err(|_| QuoteGifError::FileNotFound(path.display().to_string()))?;

    let size = file.metadata()?.len();
    if size < 2 * SAMPLE_SIZE {
        return Err(QuoteGifError::Fingerprint(format!(
            "File too small to fingerprint: {} is {} bytes, need at least {}",
            path.display(),
            size,
            2 * SAMPLE_SIZE
        )));
    }

    let mut head = vec![0u8; SAMPLE_SIZE as usize];
    file.read_exact(&mut head)?;

    let mut tail = vec![0u8; SAMPLE_SIZE as usize];
    file.seek(SeekFrom::End(-(SAMPLE_SIZE as i64)))?;
    file.read_exact(&mut tail)?;

    let mut hasher = Md5::new();
    hasher.update(&head);
    hasher.update(&tail);
    let digest = hex::encode(hasher.finalize());

    debug!("Fingerprinted {} ({} bytes) as {}", path.display(), size, digest);
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    fn sample_bytes(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let bytes = sample_bytes(256 * 1024);
        let a = write_fixture(&bytes);
        let b = write_fixture(&bytes);

        let first = fingerprint_file(a.path()).unwrap();
        let second = fingerprint_file(b.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_first_byte_changes_digest() {
        let mut bytes = sample_bytes(256 * 1024);
        let original = write_fixture(&bytes);
        bytes[0] ^= 0xff;
        let mutated = write_fixture(&bytes);

        assert_ne!(
            fingerprint_file(original.path()).unwrap(),
            fingerprint_file(mutated.path()).unwrap()
        );
    }

    #[test]
    fn test_last_byte_changes_digest() {
        let mut bytes = sample_bytes(256 * 1024);
        let original = write_fixture(&bytes);
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        let mutated = write_fixture(&bytes);

        assert_ne!(
            fingerprint_file(original.path()).unwrap(),
            fingerprint_file(mutated.path()).unwrap()
        );
    }

    #[test]
    fn test_middle_bytes_do_not_affect_digest() {
        let mut bytes = sample_bytes(256 * 1024);
        let original = write_fixture(&bytes);
        bytes[128 * 1024] ^= 0xff;
        let mutated = write_fixture(&bytes);

        assert_eq!(
            fingerprint_file(original.path()).unwrap(),
            fingerprint_file(mutated.path()).unwrap()
        );
    }

    #[test]
    fn test_small_file_is_rejected() {
        let file = write_fixture(&sample_bytes(100 * 1024));
        let result = fingerprint_file(file.path());
        assert!(matches!(result, Err(QuoteGifError::Fingerprint(_))));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = fingerprint_file("/no/such/movie.mp4");
        assert!(matches!(result, Err(QuoteGifError::FileNotFound(_))));
    }
}
