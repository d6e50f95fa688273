use crate::catalog::Platform;
use crate::pipeline::IconRecord;
use crate::{Error, Result};
use std::io::{Cursor, Write};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Packs the generated icons into an in-memory zip archive.
///
/// Every icon is written at `{platform}-icons/{name}`, deflated at the
/// strongest compression level. Entry order is input order.
pub fn pack(icons: &[IconRecord], platform: Platform) -> Result<Vec<u8>> {
    if icons.is_empty() {
        return Err(Error::EmptyIconSet);
    }
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));
    for icon in icons {
        zip.start_file(format!("{}-icons/{}", platform, icon.name()), opts)?;
        zip.write_all(icon.data())?;
    }
    tracing::debug!(%platform, entries = icons.len(), "packed icon archive");
    Ok(zip.finish()?.into_inner())
}
