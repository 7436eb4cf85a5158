// Builds throwaway /sys, /proc and /dev trees for the readers

use jayinsights::core::sysfs::SysRoot;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct FakeTree {
    dir: TempDir,
}

impl FakeTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> SysRoot {
        SysRoot::new(self.dir.path())
    }

    fn full(&self, absolute: &str) -> PathBuf {
        self.dir.path().join(absolute.trim_start_matches('/'))
    }

    pub fn write(&self, absolute: &str, contents: impl AsRef<[u8]>) -> &Self {
        let path = self.full(absolute);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    pub fn mkdir(&self, absolute: &str) -> &Self {
        fs::create_dir_all(self.full(absolute)).unwrap();
        self
    }

    #[cfg(unix)]
    pub fn symlink(&self, absolute: &str, target: &str) -> &Self {
        let path = self.full(absolute);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::os::unix::fs::symlink(target, path).unwrap();
        self
    }
}

/// An SMBIOS 2.7 Type 17 structure: locator, bank locator and
/// manufacturer are strings 1, 2 and 3.
pub fn type17(size: u16, extended_size: u32, speed: u16, memory_type: u8, strings: [&str; 3]) -> Vec<u8> {
    let mut raw = vec![0u8; 0x22];
    raw[0x00] = 17;
    raw[0x01] = 0x22;
    raw[0x0C..0x0E].copy_from_slice(&size.to_le_bytes());
    raw[0x10] = 1;
    raw[0x11] = 2;
    raw[0x12] = memory_type;
    raw[0x15..0x17].copy_from_slice(&speed.to_le_bytes());
    raw[0x17] = 3;
    raw[0x1C..0x20].copy_from_slice(&extended_size.to_le_bytes());

    for s in strings {
        raw.extend_from_slice(s.as_bytes());
        raw.push(0);
    }
    raw.push(0);
    raw
}
