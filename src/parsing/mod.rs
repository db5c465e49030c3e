pub mod config;

use config::{parse_config, Config};

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

pub fn get_settings(filepath: impl AsRef<Path>) -> anyhow::Result<Config> {
    let filepath = filepath.as_ref();
    let mut input = String::new();
    info!("loading config file {}", filepath.display());
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read {}", filepath.display()))?;
    info!("done: {} bytes", read_count);

    parse_config(&input).with_context(|| format!("invalid config in {}", filepath.display()))
}

/// Like [`get_settings`], but a missing file yields the built-in scene.
pub fn get_settings_or_default(filepath: impl AsRef<Path>) -> anyhow::Result<Config> {
    let filepath = filepath.as_ref();
    match std::fs::metadata(filepath) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "config file {} not found, using built-in defaults",
                filepath.display()
            );
            Ok(Config::default())
        }
        _ => get_settings(filepath),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::config::RendererType;

    use std::io::Write;

    #[test]
    fn test_get_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[renderer]\ntype = \"Preview\"\ntarget_fps = 30").unwrap();
        let config = get_settings(file.path()).unwrap();
        assert_eq!(
            config.renderer,
            RendererType::Preview {
                target_fps: Some(30)
            }
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.toml");
        assert!(get_settings(&path).is_err());
        assert_eq!(get_settings_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_file_still_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sphere]\ncenter = [0.0, 0.0, -10.0]\nradius = -2.0").unwrap();
        assert!(get_settings_or_default(file.path()).is_err());
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = get_settings("data/config.toml").unwrap();
        assert_eq!(config.resolution.width, config::SCREEN_WIDTH);
        assert_eq!(config.resolution.height, config::SCREEN_HEIGHT);
    }
}
