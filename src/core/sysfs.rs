//! Best-effort access to kernel pseudo-filesystems.
//!
//! Every reader in the crate goes through a [`SysRoot`], which maps absolute
//! kernel paths (`/sys/...`, `/proc/...`, `/dev/mapper/...`) onto a base
//! directory. On a live system the base is `/`; tests point it at a fake tree.
//! Reads return `Option` so each call site picks its own default.

use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder shown wherever a value could not be read or parsed.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysRoot {
    base: PathBuf,
}

impl Default for SysRoot {
    fn default() -> Self {
        Self::host()
    }
}

impl SysRoot {
    /// The running system.
    pub fn host() -> Self {
        Self::new("/")
    }

    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolve an absolute kernel path against the root.
    pub fn path(&self, absolute: impl AsRef<Path>) -> PathBuf {
        let absolute = absolute.as_ref();
        let relative = absolute.strip_prefix("/").unwrap_or(absolute);
        self.base.join(relative)
    }

    /// Read a file and trim surrounding whitespace.
    pub fn read_trimmed(&self, absolute: impl AsRef<Path>) -> Option<String> {
        read_trimmed(self.path(absolute))
    }

    /// Like [`SysRoot::read_trimmed`] but treats an empty file as absent.
    pub fn read_non_empty(&self, absolute: impl AsRef<Path>) -> Option<String> {
        self.read_trimmed(absolute).filter(|value| !value.is_empty())
    }

    pub fn read_bytes(&self, absolute: impl AsRef<Path>) -> Option<Vec<u8>> {
        fs::read(self.path(absolute)).ok()
    }

    pub fn read_to_string(&self, absolute: impl AsRef<Path>) -> Option<String> {
        fs::read_to_string(self.path(absolute)).ok()
    }

    pub fn read_u64(&self, absolute: impl AsRef<Path>) -> Option<u64> {
        self.read_trimmed(absolute)?.parse().ok()
    }

    pub fn read_f64(&self, absolute: impl AsRef<Path>) -> Option<f64> {
        self.read_trimmed(absolute)?.parse().ok()
    }

    /// Sorted names of the entries of a directory. An unreadable directory
    /// yields an empty list.
    pub fn list_dir(&self, absolute: impl AsRef<Path>) -> Vec<String> {
        list_dir(self.path(absolute))
    }

    /// File name of a symlink target, e.g. `dm-0` for `../dm-0`.
    pub fn link_target_name(&self, absolute: impl AsRef<Path>) -> Option<String> {
        let target = fs::read_link(self.path(absolute)).ok()?;
        target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

pub(crate) fn read_trimmed(path: impl AsRef<Path>) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|raw| raw.trim().to_string())
}

pub(crate) fn list_dir(path: impl AsRef<Path>) -> Vec<String> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Sectors (512 bytes) to a `"%.2f GB"` string, GiB based.
pub fn format_sectors_gb(sectors: u64) -> String {
    format_bytes_gb(sectors.saturating_mul(512))
}

pub fn format_bytes_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / 1024.0 / 1024.0 / 1024.0)
}
