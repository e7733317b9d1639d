//! Transfer job boundary
//!
//! A mirror pass never moves file contents; it registers source/destination
//! pairs with a transfer job and the service behind that job does the rest,
//! asynchronously and on its own schedule. This module defines the pair
//! value, the narrow sink trait the service is reached through, and an
//! in-memory job for tests and staging call sites.

use std::path::PathBuf;

/// A source/destination pair registered with a transfer job
///
/// Created once per qualifying source file and consumed immediately by the
/// sink. The destination's parent directory exists by the time the pair is
/// handed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPair {
    /// Absolute path of the file to transfer
    pub source: PathBuf,
    /// Absolute path the file should land at
    pub destination: PathBuf,
}

/// Sink for file pairs discovered by a mirror pass
///
/// This is the whole interface to the external transfer service: pairs go
/// in, and transfer, pause, resume and status stay on the service's side.
pub trait TransferJob {
    /// Register one file pair for later transfer
    fn add_file(&mut self, pair: TransferPair);
}

/// Adapter that lets a closure act as a transfer job
///
/// ```ignore
/// let mut seen = Vec::new();
/// mirror(&StdFilesystem, &request, &mut FnJob(|pair| seen.push(pair)))?;
/// ```
pub struct FnJob<F>(pub F);

impl<F: FnMut(TransferPair)> TransferJob for FnJob<F> {
    fn add_file(&mut self, pair: TransferPair) {
        (self.0)(pair)
    }
}

/// In-memory transfer job that records registered pairs
///
/// Useful in tests and as a staging buffer before handing a batch to a
/// real service. Each job carries a random ID so log lines from one batch
/// can be correlated.
pub struct PendingJob {
    id: String,
    pairs: Vec<TransferPair>,
}

impl PendingJob {
    /// Create an empty job with a fresh ID
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: generate_job_id(),
            pairs: Vec::new(),
        }
    }

    /// The job's correlation ID (8 hex chars)
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The pairs registered so far, in registration order
    #[must_use]
    pub fn pairs(&self) -> &[TransferPair] {
        &self.pairs
    }

    /// Number of registered pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pairs have been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consume the job, yielding its pairs
    #[must_use]
    pub fn into_pairs(self) -> Vec<TransferPair> {
        self.pairs
    }
}

impl Default for PendingJob {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferJob for PendingJob {
    fn add_file(&mut self, pair: TransferPair) {
        self.pairs.push(pair);
    }
}

/// Generate a random job ID (8 hex chars, 32 bits)
///
/// Used for log correlation only. This is NOT cryptographically secure and
/// should NOT be used for authentication or security-sensitive purposes.
fn generate_job_id() -> String {
    use rand::RngExt;
    let bytes: [u8; 4] = rand::rng().random();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_job_id_format() {
        let id = generate_job_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_job_id_uniqueness() {
        // Generate multiple IDs and verify they're different
        let ids: Vec<_> = (0..100).map(|_| generate_job_id()).collect();
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        // With 32 bits of randomness, collisions in 100 samples are extremely unlikely
        assert!(unique.len() >= 99);
    }

    #[test]
    fn test_pending_job_records_in_order() {
        let mut job = PendingJob::new();
        assert!(job.is_empty());

        job.add_file(TransferPair {
            source: PathBuf::from("/src/a.txt"),
            destination: PathBuf::from("/dst/a.txt"),
        });
        job.add_file(TransferPair {
            source: PathBuf::from("/src/b.txt"),
            destination: PathBuf::from("/dst/b.txt"),
        });

        assert_eq!(job.len(), 2);
        assert_eq!(job.pairs()[0].source, PathBuf::from("/src/a.txt"));
        assert_eq!(job.pairs()[1].destination, PathBuf::from("/dst/b.txt"));

        let pairs = job.into_pairs();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_fn_job_adapter() {
        let mut count = 0;
        {
            let mut job = FnJob(|_pair| count += 1);
            job.add_file(TransferPair {
                source: PathBuf::from("/src/a"),
                destination: PathBuf::from("/dst/a"),
            });
        }
        assert_eq!(count, 1);
    }
}
