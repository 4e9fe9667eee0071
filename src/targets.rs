//! Target address set, loaded once before workers start.
//!
//! Membership is literal string equality: no case folding, no checksum
//! normalization. The file must hold addresses in the same representation
//! the derivation in `keygen` produces (lowercase, `0x`-prefixed), or no
//! match will ever be detected.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fxhash::FxHashSet;

use crate::error::{ColliderError, Result};

/// Immutable set of target addresses. Safe for unsynchronized concurrent
/// reads once constructed.
#[derive(Debug)]
pub struct TargetSet {
    addresses: FxHashSet<String>,
}

impl TargetSet {
    /// Load one address per line. Empty lines are skipped, surrounding
    /// whitespace is stripped, duplicates collapse. A read failure partway
    /// discards the partial set.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ColliderError::TargetOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut addresses = FxHashSet::default();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| ColliderError::TargetRead {
                path: path.to_path_buf(),
                source,
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            addresses.insert(trimmed.to_string());
        }

        Ok(Self { addresses })
    }

    /// Build from in-memory addresses. Used by tests and tooling.
    pub fn from_addresses<I>(addresses: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            addresses: addresses.into_iter().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, address: &str) -> bool {
        self.addresses.contains(address)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn membership_is_exactly_the_distinct_nonempty_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0x00000000219ab540356cbb839cbe05303d7705fa").unwrap();
        writeln!(file, "  0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "0x00000000219ab540356cbb839cbe05303d7705fa").unwrap();
        file.flush().unwrap();

        let set = TargetSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("0x00000000219ab540356cbb839cbe05303d7705fa"));
        assert!(set.contains("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"));
        assert!(!set.contains("0xdeadbeef00000000000000000000000000000000"));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let set = TargetSet::from_addresses(vec![
            "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_string(),
        ]);
        assert!(set.contains("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"));
        assert!(!set.contains("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"));
    }

    #[test]
    fn blank_file_yields_empty_set() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        file.flush().unwrap();

        let set = TargetSet::load(file.path()).unwrap();
        assert!(set.is_empty());
        assert!(!set.contains(""));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = TargetSet::load("/no/such/dir/address.txt").unwrap_err();
        assert!(matches!(err, ColliderError::TargetOpen { .. }));
    }
}
