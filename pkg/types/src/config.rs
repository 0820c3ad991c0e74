use serde::{Deserialize, Serialize};

/// Converter configuration file (YAML).
///
/// Example `avi2ako.yaml`:
/// ```yaml
/// file: exported-ingresses.yaml
/// output-dir: ./generated
/// annotation: avi_proxy
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfigFile {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default, alias = "output-dir")]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub annotation: Option<String>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}
