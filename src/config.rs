mod keybindings;
mod styles;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use serde::Deserialize;

use crate::utils;

pub use keybindings::{key_event_to_string, parse_key_event, parse_key_sequence, KeyBindings};
pub use styles::{parse_style, Styles};

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        let default_config: Config = json5::from_str(CONFIG).unwrap();
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap())?
            .set_default("_config_dir", config_dir.to_str().unwrap())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        // Every setting has a default, so running without a user config
        // file is fine.
        if !found_config {
            log::info!("No user configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (mode, default_bindings) in default_config.keybindings.iter() {
            let user_bindings = cfg.keybindings.entry(*mode).or_default();
            for (key, cmd) in default_bindings.iter() {
                user_bindings
                    .entry(key.clone())
                    .or_insert_with(|| cmd.clone());
            }
        }
        for (mode, default_styles) in default_config.styles.iter() {
            let user_styles = cfg.styles.entry(*mode).or_default();
            for (style_key, style) in default_styles.iter() {
                user_styles
                    .entry(style_key.clone())
                    .or_insert_with(|| *style);
            }
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{action::Action, mode::Mode};

    use super::*;

    #[test]
    fn test_embedded_default_config_parses() {
        let config: Config = json5::from_str(CONFIG).expect("default config must parse");
        assert!(config.keybindings.get(&Mode::Home).is_some());
    }

    #[test]
    fn test_default_keybindings_are_merged() {
        let c = Config::new().expect("config");
        let keymap = c.keybindings.get(&Mode::Home).expect("Home keymap");
        assert_eq!(
            keymap.get(&parse_key_sequence("<q>").unwrap_or_default()),
            Some(&Action::Quit)
        );
        assert_eq!(
            keymap.get(&parse_key_sequence("<e>").unwrap_or_default()),
            Some(&Action::Export)
        );
        assert_eq!(
            keymap.get(&parse_key_sequence("<down>").unwrap_or_default()),
            Some(&Action::NextUnit)
        );
    }

    #[test]
    fn test_default_styles_are_merged() {
        let c = Config::new().expect("config");
        let styles = c.styles.get(&Mode::Home).expect("Home styles");
        assert!(styles.contains_key("highlight"));
        assert!(styles.contains_key("error"));
    }
}
