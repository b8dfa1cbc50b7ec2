use std::path::{Path, PathBuf};

use serde::Deserialize;
use termseg::Options;

const CONFIG_DIR: &str = "termseg";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub segment: Options,
}

/// Default configuration file, `<config dir>/termseg/config.toml`
pub(crate) fn config_file() -> Option<PathBuf> {
    let config = dirs::config_dir()?;
    Some(config.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Read the default configuration file if it exists, and then `path` which
/// must exist if given. Later sources override earlier ones.
pub(crate) fn read_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut builder = config::Config::builder();

    if let Some(default) = config_file() {
        log::debug!("Default configuration file {default:?}");
        builder = builder.add_source(config::File::from(default).required(false));
    }

    if let Some(path) = path {
        log::info!("Reading configuration from {path:?}");
        builder = builder.add_source(config::File::from(path));
    }

    let config = builder.build()?.try_deserialize::<Config>()?;
    Ok(config)
}

#[cfg(test)]
mod test {
    use std::fs;

    use termseg::AmbiguousWidth;

    use super::*;

    #[test]
    fn read_file() {
        let path = std::env::temp_dir().join("termseg-config-test.toml");
        fs::write(
            &path,
            "[segment.width]\nambiguous = \"wide\"\n\n[segment.sentence]\nabbreviations = [\"approx.\"]\n",
        )
        .unwrap();

        let config = read_config(Some(&path)).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(AmbiguousWidth::Wide, config.segment.width.ambiguous);
        assert!(config.segment.sentence.abbreviations.contains("approx."));
        assert!(!config.segment.sentence.abbreviations.contains("Mr."));
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("termseg-does-not-exist.toml");
        assert!(read_config(Some(&path)).is_err());
    }
}
