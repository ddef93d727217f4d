//! Writes the JSON pallet-instruction artifact.

use std::path::{Path, PathBuf};

use warehouse_primitives::Pallet;

use crate::error::{Result, ServiceError};

/// Writes one artifact file per successful packing call to a fixed
/// directory, named `pallet_instructions_<order_number>_<YYYYMMDD_HHMMSS>.json`.
/// The directory is append-only: readers select the most-recently-modified
/// file matching the order-number prefix.
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ArtifactWriter { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Serializes `pallets` and writes them to a fresh timestamped file,
    /// returning the path written.
    pub fn write(&self, order_number: u64, pallets: &[Pallet]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(ServiceError::ArtifactWrite)?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let path = self
            .dir
            .join(format!("pallet_instructions_{order_number}_{timestamp}.json"));

        let json = serde_json::to_vec_pretty(pallets).map_err(ServiceError::ArtifactEncode)?;
        std::fs::write(&path, json).map_err(ServiceError::ArtifactWrite)?;

        log::debug!(
            "wrote {} pallet(s) for order {} to {}",
            pallets.len(),
            order_number,
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warehouse_primitives::{Item, PalletSpec, SolverLimits, SolverWeights};
    use warehouse_engine::pack_order;

    #[test]
    fn writes_a_json_file_named_with_order_number_and_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ArtifactWriter::new(dir.path());

        let item = Item::new("SKU-0", "SKU", "widget", 40, 30, 30, 3.5, false, true, 1, "A-01-01").unwrap();
        let pallets = pack_order(
            vec![item],
            &PalletSpec::default(),
            &SolverWeights::default(),
            &SolverLimits::default(),
        )
        .unwrap();

        let path = writer.write(42, &pallets).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("pallet_instructions_42_"));
        assert!(name.ends_with(".json"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"id\": \"SKU-0\""));
    }
}
