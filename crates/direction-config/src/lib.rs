//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, LoggingConfig, PathSettings, SplitSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from an optional file and the environment.
///
/// Missing keys fall back to the built-in defaults. Environment variables
/// such as `DIRECTION__SPLIT__TRAIN_RATIO=0.75` override the file.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix("DIRECTION")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings: AppConfig = config.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[paths]\ninput = \"data/eth.csv\"\n\n[split]\ntrain_ratio = 0.75\n"
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("data/eth.csv"));
        assert_eq!(config.paths.output_dir, PathBuf::from("btc_data_preprocessed"));
        assert_eq!(config.split.train_ratio, 0.75);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_ratio_in_file_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[split]\ntrain_ratio = 1.2\n").unwrap();

        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_config(Some(Path::new("no/such/config.toml"))).is_err());
    }
}
