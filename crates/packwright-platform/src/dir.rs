use std::path::{Path, PathBuf};

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

/// Whether the current user may create entries inside `path`.
pub fn is_writable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use nix::unistd::{AccessFlags, access};
        access(path, AccessFlags::W_OK).is_ok()
    }
    #[cfg(not(unix))]
    {
        std::fs::metadata(path)
            .map(|m| m.is_dir() && !m.permissions().readonly())
            .unwrap_or(false)
    }
}
