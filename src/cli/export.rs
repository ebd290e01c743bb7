//! `tccview export` command implementation.

use crate::export::Dataset;
use std::path::Path;

pub fn run(dataset: Dataset, output: &Path) -> anyhow::Result<()> {
    let path = dataset.save_to(output)?;
    tracing::info!(dataset = dataset.label(), path = %path.display(), "Artifact saved");
    println!(
        "Saved {} artifact to {} ({} bytes)",
        dataset.label(),
        path.display(),
        dataset.bytes().len()
    );
    Ok(())
}
