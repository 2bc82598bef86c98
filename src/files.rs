use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;

use crate::error::Result;

pub fn write_document_file<S: AsRef<str>, P: AsRef<path::Path>>(
    content: S,
    dest_file: P,
) -> Result<()> {
    write_document_file_internal(content.as_ref(), dest_file.as_ref())
}

fn write_document_file_internal(content: &str, dest_file: &path::Path) -> Result<()> {
    // create target directories if any exist
    if let Some(parent) = dest_file.parent() {
        fs::create_dir_all(parent).with_context(|| {
            anyhow::format_err!("Could not create directory {}", parent.display())
        })?;
    }

    let mut file = fs::File::create(dest_file)
        .with_context(|| anyhow::format_err!("Could not create {}", dest_file.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| anyhow::format_err!("Could not write {}", dest_file.display()))?;
    log::trace!("Wrote {}", dest_file.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("a/b/site.json");
        write_document_file("{}", &dest).unwrap();
        assert_eq!(fs::read_to_string(dest).unwrap(), "{}");
    }
}
