use anyhow::Context;
use std::fs;
use std::path::Path;

/// Writes `bytes` next to `dst` and swaps it in, keeping the old file as a
/// backup until the swap succeeds.
pub fn write_atomically(dst: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory: {}", parent.display()))?;
    }

    let tmp = dst.with_extension("tmp");
    fs::write(&tmp, bytes).with_context(|| format!("write temp: {}", tmp.display()))?;
    replace_file(&tmp, dst)
}

pub fn replace_file(tmp: &Path, dst: &Path) -> anyhow::Result<()> {
    let backup = dst.with_extension("bak");

    if dst.exists() {
        let _ = fs::remove_file(&backup);
        fs::rename(dst, &backup)
            .with_context(|| format!("rename {} -> {}", dst.display(), backup.display()))?;
    }

    if let Err(e) = fs::rename(tmp, dst) {
        // Put the previous file back if we moved one aside.
        if backup.exists() {
            let _ = fs::rename(&backup, dst);
        }
        let _ = fs::remove_file(tmp);
        return Err(anyhow::Error::new(e).context(format!(
            "rename {} -> {}",
            tmp.display(),
            dst.display()
        )));
    }

    let _ = fs::remove_file(&backup);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_and_leaves_no_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let dst = dir.path().join("nested").join("config.json");

        write_atomically(&dst, b"one").unwrap();
        write_atomically(&dst, b"two").unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"two");
        assert!(!dst.with_extension("tmp").exists());
        assert!(!dst.with_extension("bak").exists());
    }
}
