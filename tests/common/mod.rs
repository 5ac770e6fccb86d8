use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Scratch directory unique to one test; removed on drop.
pub struct Scratch {
    base: PathBuf,
}

impl Scratch {
    pub fn new() -> Self {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let tid = format!("{:?}", std::thread::current().id());
        let dir = std::env::temp_dir().join(format!(
            "boltcal-icons-tests-{}-{}-{}",
            std::process::id(),
            tid.replace(['(', ')'], ""),
            stamp
        ));
        fs::create_dir_all(&dir).unwrap();
        Self { base: dir }
    }

    pub fn path(&self) -> &Path {
        &self.base
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.base);
    }
}
