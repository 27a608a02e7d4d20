use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Configuration file looked up in the current working directory.
pub const CONFIG_PATH: &str = "config.yaml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Single character drawn for a sample at or above a gridline.
    pub marker: String,
    /// Width of the right-aligned gridline label column.
    pub label_width: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            marker: "x".to_string(),
            label_width: 4,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Major currency unit shown next to prices, e.g. "SEK".
    pub currency: String,
    pub energy_unit: String,

    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: "SEK".to_string(),
            energy_unit: "kWh".to_string(),
            chart: ChartConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads 'config.yaml' from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let yaml_content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("❌ Failed to read {}: {}", path.display(), e).into()),
        };

        Self::from_yaml(&yaml_content)
    }

    /// Parses and validates a YAML document. Missing fields take defaults.
    pub fn from_yaml(yaml_content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        // An empty file deserializes as unit, not as a mapping.
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig = serde_yaml::from_str(yaml_content)
            .map_err(|e| format!("❌ Failed to parse config: {}", e))?;

        if config.chart.marker.chars().count() != 1 {
            return Err(format!("❌ chart.marker must be a single character, got {:?}", config.chart.marker).into());
        }
        if !(1..=10).contains(&config.chart.label_width) {
            return Err(format!("❌ chart.label_width must be between 1 and 10, got {}", config.chart.label_width).into());
        }

        Ok(config)
    }

    /// Price unit shown to the user, e.g. "SEK/kWh".
    pub fn price_unit(&self) -> String {
        format!("{}/{}", self.currency, self.energy_unit)
    }
}
