//! Frequency table discovery
//!
//! The kernel lists the legal operating points of a clock domain as a single
//! whitespace separated line, lowest first. The loader keeps the tokens in
//! order without parsing or sorting them; validation happens when a slot is
//! used (see [`FrequencyTable::frequency`]).

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, error};

use crate::constants::limits::{FREQ_TABLE_CAPACITY, READ_CAPACITY};
use crate::data::Frequency;
use crate::error::{PowerError, Result};

/// Clock domain a table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreqDomain {
    CpuCluster0,
    Gpu,
}

impl FreqDomain {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CpuCluster0 => "cpu_clust0",
            Self::Gpu => "gpu",
        }
    }
}

impl fmt::Display for FreqDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered frequency tokens for one clock domain, index 0 is the slowest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    domain: FreqDomain,
    entries: Vec<String>,
    discarded: usize,
}

impl FrequencyTable {
    pub fn empty(domain: FreqDomain) -> Self {
        Self {
            domain,
            entries: Vec::new(),
            discarded: 0,
        }
    }

    /// Tokenize `content`, keeping at most `FREQ_TABLE_CAPACITY` entries
    pub fn from_content(domain: FreqDomain, content: &str) -> Self {
        let mut entries = Vec::with_capacity(FREQ_TABLE_CAPACITY);
        let mut discarded = 0;
        for token in content.split_whitespace() {
            if entries.len() < FREQ_TABLE_CAPACITY {
                entries.push(token.to_string());
            } else {
                discarded += 1;
            }
        }
        Self {
            domain,
            entries,
            discarded,
        }
    }

    pub fn domain(&self) -> FreqDomain {
        self.domain
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tokens dropped because the source listed more than the table holds
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Raw token at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Token at `index` if it is populated and starts with a digit
    pub fn frequency(&self, index: usize) -> Result<Frequency> {
        self.get(index)
            .and_then(Frequency::parse)
            .ok_or(PowerError::InvalidFrequency {
                table: self.domain.label(),
                index,
            })
    }
}

fn read_source(domain: FreqDomain, path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|source| PowerError::FrequencyRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buf = Vec::with_capacity(READ_CAPACITY);
    file.take(READ_CAPACITY as u64)
        .read_to_end(&mut buf)
        .map_err(|source| PowerError::FrequencyRead {
            path: path.to_path_buf(),
            source,
        })?;

    let content = String::from_utf8_lossy(&buf).into_owned();
    debug!("{}_freqs: {}", domain, content.trim_end());
    Ok(content)
}

fn overflow(path: &Path, table: &FrequencyTable) -> Option<PowerError> {
    (table.discarded() > 0).then(|| PowerError::TableOverflow {
        path: path.to_path_buf(),
        capacity: FREQ_TABLE_CAPACITY,
        discovered: table.len() + table.discarded(),
    })
}

/// Read and tokenize a frequency source.
///
/// At most `READ_CAPACITY` bytes are read. More tokens than the table
/// capacity is reported as `TableOverflow`.
pub fn try_load_frequency_table(domain: FreqDomain, path: &Path) -> Result<FrequencyTable> {
    let table = FrequencyTable::from_content(domain, &read_source(domain, path)?);
    match overflow(path, &table) {
        Some(e) => Err(e),
        None => Ok(table),
    }
}

/// Discover the table for `domain`, never failing.
///
/// An unreadable source yields an empty table. An oversized one keeps the
/// first `FREQ_TABLE_CAPACITY` entries.
pub fn load_frequency_table(domain: FreqDomain, path: &Path) -> FrequencyTable {
    let table = match read_source(domain, path) {
        Ok(content) => FrequencyTable::from_content(domain, &content),
        Err(e) => {
            error!("{}", e);
            return FrequencyTable::empty(domain);
        }
    };
    if let Some(e) = overflow(path, &table) {
        error!("{}", e);
    }

    for (i, freq) in table.iter().enumerate() {
        debug!("{} available freq[{}]: {}", domain, i, freq);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("scaling_available_frequencies");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_three_tokens_in_order() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "100000 200000 300000");

        let table = load_frequency_table(FreqDomain::CpuCluster0, &path);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0), Some("100000"));
        assert_eq!(table.get(1), Some("200000"));
        assert_eq!(table.get(2), Some("300000"));
    }

    #[test]
    fn test_trailing_newline_not_part_of_token() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "216000 408000 600000 \n");

        let table = load_frequency_table(FreqDomain::CpuCluster0, &path);
        let tokens: Vec<&str> = table.iter().collect();
        assert_eq!(tokens, vec!["216000", "408000", "600000"]);
    }

    #[test]
    fn test_unreadable_source_gives_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing");

        let table = load_frequency_table(FreqDomain::Gpu, &path);
        assert!(table.is_empty());
        assert!(matches!(
            try_load_frequency_table(FreqDomain::Gpu, &path),
            Err(PowerError::FrequencyRead { .. })
        ));
    }

    #[test]
    fn test_empty_source_gives_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "");
        assert!(load_frequency_table(FreqDomain::Gpu, &path).is_empty());
    }

    #[test]
    fn test_overflow_reported_and_truncated() {
        let dir = TempDir::new().unwrap();
        let tokens: Vec<String> = (1..=12).map(|i| (i * 100000).to_string()).collect();
        let path = source(&dir, &tokens.join(" "));

        match try_load_frequency_table(FreqDomain::CpuCluster0, &path) {
            Err(PowerError::TableOverflow {
                capacity,
                discovered,
                ..
            }) => {
                assert_eq!(capacity, 10);
                assert_eq!(discovered, 12);
            }
            other => panic!("expected overflow, got {:?}", other),
        }

        let table = load_frequency_table(FreqDomain::CpuCluster0, &path);
        assert_eq!(table.len(), 10);
        assert_eq!(table.get(9), Some("1000000"));
        assert_eq!(table.get(10), None);
    }

    #[test]
    fn test_read_capped_at_127_bytes() {
        let dir = TempDir::new().unwrap();
        // 9 tokens of 16 bytes each; the 127 byte read ends exactly after the 8th
        let content = "100000000000000 ".repeat(9);
        let path = source(&dir, &content);

        let table = load_frequency_table(FreqDomain::Gpu, &path);
        assert_eq!(table.len(), 8);
        assert_eq!(table.get(7), Some("100000000000000"));
    }

    #[test]
    fn test_frequency_validates_slot() {
        let table = FrequencyTable::from_content(FreqDomain::Gpu, "200000000 bogus");
        assert_eq!(table.frequency(0).unwrap().to_string(), "200000000");
        assert!(matches!(
            table.frequency(1),
            Err(PowerError::InvalidFrequency {
                table: "gpu",
                index: 1,
            })
        ));
        assert!(table.frequency(5).is_err());
    }
}
