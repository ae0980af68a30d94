use serde::{
    Deserialize,
    Serialize,
};

use crate::color::Color;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_recently_opened_files_limit")]
    pub recently_opened_files_limit: usize,

    /// Color selected at start-up.
    #[serde(default)]
    pub initial_color: Color,

    /// Edge length of the palette swatches, in points.
    #[serde(default = "default_swatch_size")]
    pub swatch_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recently_opened_files_limit: default_recently_opened_files_limit(),
            initial_color: Default::default(),
            swatch_size: default_swatch_size(),
        }
    }
}

fn default_recently_opened_files_limit() -> usize {
    10
}

fn default_swatch_size() -> f32 {
    24.0
}

#[cfg(test)]
mod tests {
    use crate::{
        color::Color,
        config::AppConfig,
    };

    #[test]
    fn default_config_round_trips_through_toml() {
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml.contains(r##"initial_color = "#FF0000""##));

        let config: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config.recently_opened_files_limit, 10);
        assert_eq!(config.initial_color, Color::RED);
        assert_eq!(config.swatch_size, 24.0);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: AppConfig = toml::from_str(r#"initial_color = "teal""#).unwrap();
        assert_eq!(config.initial_color, Color::new(0, 128, 128));
        assert_eq!(config.recently_opened_files_limit, 10);
        assert_eq!(config.swatch_size, 24.0);
    }
}
