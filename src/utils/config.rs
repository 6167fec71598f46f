use serde::Deserialize;
use std::{fs::File, path::Path, path::PathBuf};

use crate::GeneratorError;

/// Slot in the output template replaced by the lower-cased enum name.
pub const OUTPUT_NAME_SLOT: &str = "%s";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_name")]
    pub name: String,
    /// Comma separated, in ordinal order
    #[serde(default)]
    pub values: String,
    /// `Name:Label1,Label2,...` entries
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default = "default_output")]
    pub output: String,
    /// Program and arguments, the output path is appended. Empty disables formatting.
    #[serde(default = "default_formatter")]
    pub formatter: Vec<String>,
}

pub fn default_name() -> String {
    "Enum".to_string()
}

pub fn default_package() -> String {
    "enums".to_string()
}

pub fn default_output() -> String {
    format!("./{}_enumero.go", OUTPUT_NAME_SLOT)
}

pub fn default_formatter() -> Vec<String> {
    vec!["go".to_string(), "fmt".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: default_name(),
            values: String::new(),
            variants: vec![],
            package: default_package(),
            output: default_output(),
            formatter: default_formatter(),
        }
    }
}

/// Values given on the command line, applied over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub values: Option<String>,
    /// Appended after the variants of the config file
    pub variants: Vec<String>,
    pub package: Option<String>,
    pub output: Option<String>,
    pub formatter: Option<String>,
    pub no_format: bool,
}

impl Config {
    /// Loads the optional config file and applies `overrides` on top of it.
    pub fn load(
        config_file_path: Option<&Path>,
        overrides: ConfigOverrides,
    ) -> Result<Self, GeneratorError> {
        let mut config = match config_file_path {
            Some(config_file) => Config::from(config_file)?,
            None => Config::new(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(name) = overrides.name {
            self.name = name;
        }
        if let Some(values) = overrides.values {
            self.values = values;
        }
        self.variants.extend(overrides.variants);
        if let Some(package) = overrides.package {
            self.package = package;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(formatter) = overrides.formatter {
            self.set_formatter_command(&formatter);
        }
        if overrides.no_format {
            self.disable_formatter();
        }
    }

    pub fn from(config_file_path: &Path) -> Result<Self, GeneratorError> {
        let path = config_file_path.to_string_lossy().to_string();
        let file = File::open(config_file_path)
            .map_err(|err| GeneratorError::ConfigError(path.clone(), err.to_string()))?;
        serde_json::from_reader(file).map_err(|err| GeneratorError::ConfigError(path, err.to_string()))
    }

    pub fn new() -> Self {
        Config::default()
    }

    /// Output template with its slot filled in.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(
            self.output
                .replacen(OUTPUT_NAME_SLOT, &self.name.to_lowercase(), 1),
        )
    }

    pub fn set_formatter_command(&mut self, command: &str) {
        self.formatter = command.split_whitespace().map(str::to_owned).collect();
    }

    pub fn disable_formatter(&mut self) {
        self.formatter.clear();
    }
}
