//! Snapshot persistence for fitted estimators.
//!
//! A snapshot is an opaque blob: 4 magic bytes, a version byte, then a
//! bincode-encoded record of the estimator's four fields (`n_clusters`,
//! metric tag, labels, centers). It is an internal round-trip format with
//! no guarantees beyond same-version fidelity; a restored estimator
//! predicts identically to the original without re-fitting.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clustering::Trendy;
use crate::distance::{MetricKind, MetricSpace};
use crate::error::{Result, TrendyError};

const SNAPSHOT_MAGIC: [u8; 4] = *b"TRDY";
const SNAPSHOT_VERSION: u8 = 1;

#[derive(Serialize, Deserialize)]
struct SnapshotRecord<S> {
    n_clusters: usize,
    metric: MetricKind,
    labels: Option<Vec<usize>>,
    centers: Option<Vec<S>>,
}

impl<S> Trendy<S>
where
    S: MetricSpace + Clone + Serialize + DeserializeOwned,
{
    /// Encode the whole estimator as an opaque byte blob.
    ///
    /// # Errors
    /// [`TrendyError::Serialization`] when the estimator uses a custom
    /// distance closure (closures have no persistable identity) or when
    /// encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.dist.kind() == MetricKind::Custom {
            return Err(TrendyError::Serialization(
                "custom distance functions cannot be persisted".to_string(),
            ));
        }

        let record = SnapshotRecord {
            n_clusters: self.n_clusters,
            metric: self.dist.kind(),
            labels: self.labels.clone(),
            centers: self.centers.clone(),
        };
        let body = bincode::serialize(&record)
            .map_err(|e| TrendyError::Serialization(e.to_string()))?;

        let mut data = Vec::with_capacity(SNAPSHOT_MAGIC.len() + 1 + body.len());
        data.extend_from_slice(&SNAPSHOT_MAGIC);
        data.push(SNAPSHOT_VERSION);
        data.extend_from_slice(&body);
        Ok(data)
    }

    /// Restore an estimator from a blob produced by [`Trendy::to_bytes`].
    ///
    /// # Errors
    /// [`TrendyError::Serialization`] on a truncated, foreign, or corrupt
    /// blob, or when the metric tag names no built-in for this sequence
    /// type.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header_len = SNAPSHOT_MAGIC.len() + 1;
        if data.len() < header_len || data[..SNAPSHOT_MAGIC.len()] != SNAPSHOT_MAGIC {
            return Err(TrendyError::Serialization(
                "not a trendy snapshot".to_string(),
            ));
        }
        let version = data[SNAPSHOT_MAGIC.len()];
        if version != SNAPSHOT_VERSION {
            return Err(TrendyError::Serialization(format!(
                "unsupported snapshot version: {}",
                version
            )));
        }

        let record: SnapshotRecord<S> = bincode::deserialize(&data[header_len..])
            .map_err(|e| TrendyError::Serialization(e.to_string()))?;

        let dist = S::metric_for(record.metric).ok_or_else(|| {
            TrendyError::Serialization(format!(
                "metric {:?} is not available for this sequence type",
                record.metric
            ))
        })?;

        Ok(Self {
            n_clusters: record.n_clusters,
            dist,
            labels: record.labels,
            centers: record.centers,
        })
    }

    /// Write the estimator snapshot to a file.
    ///
    /// Writes to a temporary sibling first and renames over the target, so
    /// a crash mid-write never leaves a half-written snapshot behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let data = self.to_bytes()?;

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, &data).map_err(|e| TrendyError::Io(e.to_string()))?;
        fs::rename(&tmp, path).map_err(|e| TrendyError::Io(e.to_string()))?;
        Ok(())
    }

    /// Read an estimator snapshot from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path.as_ref()).map_err(|e| TrendyError::Io(e.to_string()))?;
        Self::from_bytes(&data)
    }
}
