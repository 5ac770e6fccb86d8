use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::capability::MISSING_PNG_MESSAGE;
use crate::config::Config;
use crate::error::IconError;
use crate::icon::create_icon_with;

/// Generates every configured icon in order and reports each to `out`.
///
/// `probe` runs before anything touches the filesystem; an error from it
/// ends the run with no directory created, and a missing PNG encoder is
/// reported to `out` first. Any later failure stops the run where it
/// happened, leaving icons already written in place.
pub fn run<P, W>(config: &Config, probe: P, out: &mut W) -> Result<Vec<PathBuf>, IconError>
where
    P: FnOnce() -> Result<(), IconError>,
    W: Write,
{
    if let Err(e) = probe() {
        if matches!(e, IconError::MissingCapability) {
            writeln!(out, "{MISSING_PNG_MESSAGE}")?;
        }
        return Err(e);
    }

    fs::create_dir_all(&config.out_dir)
        .map_err(|source| IconError::CreateDir { path: config.out_dir.clone(), source })?;

    let mut written = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        let path = config.target_path(target);
        create_icon_with(target.size, &path, &config.palette, out)?;
        written.push(path);
    }

    writeln!(out)?;
    writeln!(out, "All icons created successfully!")?;
    tracing::debug!(count = written.len(), dir = %config.out_dir.display(), "icon set complete");
    Ok(written)
}
