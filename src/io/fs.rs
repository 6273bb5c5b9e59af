use std::{fs, io::Write, path::Path};

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

/// Make sure `dir` can receive downloaded collections, creating it and any
/// missing parents. A plain file sitting at `dir` is an error.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => bail!("Output path {} is a file, not a directory", dir.display()),
        Err(_) => fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create output directory {}", dir.display())),
    }
}

/// Check that a data directory given for reading is really there.
pub(crate) fn check_data_dir(dir: &Path) -> Result<()> {
    let meta = fs::metadata(dir)
        .with_context(|| format!("Data directory {} is not accessible", dir.display()))?;
    if !meta.is_dir() {
        bail!("Data path {} is a file, not a directory", dir.display());
    }
    Ok(())
}

/// Write `bytes` to `path` through a temp file in the same directory and an
/// atomic rename. Refuses to replace an existing file unless `force` is set.
pub fn write_atomic(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    let dir = path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    prepare_output_dir(dir)?;

    if !force && path.exists() {
        bail!("Refusing to overwrite existing file: {} (use --force)", path.display());
    }

    let mut tmp = NamedTempFile::new_in(dir).context("create temp file")?;
    tmp.write_all(bytes).with_context(|| format!("write {}", path.display()))?;
    tmp.as_file().sync_all().ok(); // best-effort fsync
    tmp.persist(path).with_context(|| format!("rename to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("users.json");

        write_atomic(&path, b"[]", false).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"[]");

        let err = write_atomic(&path, b"[1]", false).unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite"), "{err}");
        assert_eq!(fs::read(&path).unwrap(), b"[]");

        write_atomic(&path, b"[1]", true).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"[1]");
    }

    #[test]
    fn output_dir_is_created_and_reused() {
        let dir = tempfile::tempdir().unwrap();
        let created = dir.path().join("a/b");
        prepare_output_dir(&created).unwrap();
        assert!(created.is_dir());
        prepare_output_dir(&created).unwrap();

        let file = dir.path().join("file");
        fs::write(&file, "x").unwrap();
        let err = prepare_output_dir(&file).unwrap_err();
        assert!(err.to_string().contains("is a file"), "{err}");
    }

    #[test]
    fn data_dir_must_exist_and_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "x").unwrap();

        check_data_dir(dir.path()).unwrap();
        let err = check_data_dir(&dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("not accessible"), "{err}");
        let err = check_data_dir(&file).unwrap_err();
        assert!(err.to_string().contains("is a file"), "{err}");
    }
}
