use crate::utils::error::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Changes the process working directory for as long as the guard lives.
///
/// The directory that was current at `enter` is restored on drop, so early
/// returns and `?` propagation inside the scope still put the process back.
#[derive(Debug)]
pub struct ScopedDir {
    previous: PathBuf,
}

impl ScopedDir {
    pub fn enter<P: AsRef<Path>>(path: P) -> Result<Self> {
        let previous = env::current_dir()?;
        env::set_current_dir(path.as_ref())?;
        tracing::debug!("Entered {}", path.as_ref().display());
        Ok(Self { previous })
    }

    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for ScopedDir {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            tracing::error!(
                "❌ Failed to restore working directory {}: {}",
                self.previous.display(),
                e
            );
        }
    }
}
