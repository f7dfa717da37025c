use dotenv::dotenv;
use std::fs;
use std::io;
use std::path::Path;

/// Load variables from a `.env` file in the working directory, if one exists.
/// Values already set in the process environment win.
pub fn load_env() {
    dotenv().ok();
}

pub fn create_file_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
