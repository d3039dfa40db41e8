use std::{fs, path::Path};

use bookworm::ReviewDraft;

use eyre::{eyre, Context, Result};
use log::trace;

/// Read a review draft from a JSON file.
pub fn read_draft(path: &Path) -> Result<ReviewDraft> {
    trace!("Reading draft from {}", path.display());
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to open the '{}' draft file for reading.", path.display()))?;

    parse_draft(&content).wrap_err_with(|| eyre!("'{}' is not a valid draft", path.display()))
}

fn parse_draft(content: &str) -> Result<ReviewDraft> {
    serde_json::from_str(content).wrap_err("Cannot parse draft JSON")
}
