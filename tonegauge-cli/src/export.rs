use anyhow::Context;
use std::path::{Path, PathBuf};
use tonegauge_appcore::view::ResultView;

/// Writes one `<kind>.svg` per gauge into `dir`.
pub fn write_gauge_svgs(dir: &Path, result: &ResultView) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("create directory: {}", dir.display()))?;

    let mut written = Vec::with_capacity(result.gauges.len());
    for g in &result.gauges {
        let path = dir.join(format!("{}.svg", g.label.to_lowercase()));
        std::fs::write(&path, g.svg()).with_context(|| format!("write {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
