use crate::{ProbeError, ProbeResult};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Name of the file a meet directory uses to record its source URL(s).
pub const MARKER_FILE: &str = "URL";

/// Collects every URL recorded in a `URL` marker file anywhere under `root`.
///
/// Lines are trimmed and blank lines dropped. Any directory or marker file
/// that cannot be read is an error: skipping it could hide a meet that is
/// already entered.
pub fn entered_urls<P: AsRef<Path>>(root: P) -> ProbeResult<HashSet<String>> {
    let mut urls = HashSet::new();
    visit(root.as_ref(), &mut urls)?;
    debug!(
        "Found {} entered URLs under {}",
        urls.len(),
        root.as_ref().display()
    );
    Ok(urls)
}

fn visit(dir: &Path, urls: &mut HashSet<String>) -> ProbeResult<()> {
    let entries = fs::read_dir(dir).map_err(|e| ProbeError::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| ProbeError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| ProbeError::io(&path, e))?;

        if file_type.is_dir() {
            visit(&path, urls)?;
        } else if entry.file_name() == MARKER_FILE {
            read_marker(&path, urls)?;
        }
    }

    Ok(())
}

fn read_marker(path: &Path, urls: &mut HashSet<String>) -> ProbeResult<()> {
    let contents = fs::read_to_string(path).map_err(|e| ProbeError::io(path, e))?;
    urls.extend(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string),
    );
    Ok(())
}
