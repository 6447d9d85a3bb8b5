//! Create or reset the data file from the seed template.

use std::path::Path;

use apa_store::AsyncDataStore;
use tracing::info;

use super::CommandError;

/// Write the seed template to the data file.
///
/// An existing file is left alone unless `force` is set.
///
/// # Errors
///
/// Returns an error if the data file cannot be written.
pub async fn run(store: &AsyncDataStore, path: &Path, force: bool) -> Result<(), CommandError> {
    if path.exists() && !force {
        info!(path = %path.display(), "Data file already exists, use --force to reset it");
        return Ok(());
    }

    let document = store.reset().await?;
    info!(
        path = %path.display(),
        products = document.products.len(),
        saved_carts = document.saved_carts.len(),
        "Seeded app data"
    );
    Ok(())
}
