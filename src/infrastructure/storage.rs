use std::fs;
use std::path::{Path, PathBuf};

pub const HISTORY_FILE: &str = "import_history.json";

pub fn resolve_data_dir(data_dir: &Path) -> std::io::Result<PathBuf> {
    ensure_dir(data_dir)?;
    Ok(data_dir.to_path_buf())
}

pub fn history_file_path(data_dir: &Path) -> std::io::Result<PathBuf> {
    let data_dir = resolve_data_dir(data_dir)?;
    Ok(data_dir.join(HISTORY_FILE))
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
