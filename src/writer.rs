/*!
 * File sink for CtxCat
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::document::ContextDocument;

/// Write the aggregate document to `path`, overwriting unconditionally.
///
/// Returns the number of bytes written.
pub fn write_output(path: &Path, document: &ContextDocument) -> io::Result<u64> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(document.content.as_bytes())?;
    writer.flush()?;
    Ok(document.content.len() as u64)
}
