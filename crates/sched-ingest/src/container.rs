//! Reads the document entry out of the ODS zip container.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use sched_model::{Result, ScheduleError};

/// The structured-document entry every ODS container carries.
const CONTENT_ENTRY: &str = "content.xml";

/// Open `path` as a compressed container and buffer its `content.xml`
/// entry into memory.
///
/// One-shot and fail-fast: an invalid container or a missing entry is a
/// [`ScheduleError::Container`] and nothing is retried.
pub fn read_content(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)
        .map_err(|err| ScheduleError::Container(format!("{}: {err}", path.display())))?;
    let mut entry = archive.by_name(CONTENT_ENTRY).map_err(|err| {
        ScheduleError::Container(format!("{}: no {CONTENT_ENTRY} entry: {err}", path.display()))
    })?;
    let mut content = Vec::with_capacity(usize::try_from(entry.size()).unwrap_or(0));
    entry.read_to_end(&mut content)?;
    debug!(path = %path.display(), bytes = content.len(), "read document content");
    Ok(content)
}
