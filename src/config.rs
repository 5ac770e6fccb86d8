use std::path::{Path, PathBuf};

use image::Rgb;

/// One icon to generate: pixel side length and file name inside the output dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: String,
}

impl IconTarget {
    pub fn new(size: u32, file_name: &str) -> Self {
        Self { size, file_name: file_name.to_string() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb([0x00, 0x78, 0xd4]), // #0078d4
            foreground: Rgb([0xff, 0xff, 0xff]),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub out_dir: PathBuf,
    pub targets: Vec<IconTarget>,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("icons"),
            targets: vec![
                IconTarget::new(16, "icon16.png"),
                IconTarget::new(48, "icon48.png"),
                IconTarget::new(128, "icon128.png"),
            ],
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Same settings, written below `dir` instead of `icons/`.
    pub fn with_out_dir(dir: impl AsRef<Path>) -> Self {
        Self { out_dir: dir.as_ref().to_path_buf(), ..Self::default() }
    }

    pub fn target_path(&self, target: &IconTarget) -> PathBuf {
        self.out_dir.join(&target.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_in_order() {
        let cfg = Config::default();
        let sizes: Vec<u32> = cfg.targets.iter().map(|t| t.size).collect();
        assert_eq!(sizes, vec![16, 48, 128]);
        assert_eq!(cfg.target_path(&cfg.targets[2]), Path::new("icons").join("icon128.png"));
    }

    #[test]
    fn background_is_brand_blue() {
        assert_eq!(Palette::default().background, Rgb([0, 120, 212]));
    }
}
