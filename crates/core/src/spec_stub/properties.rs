use std::collections::BTreeMap;

use crate::error::{Error, Result};

pub const MODULE_PACKAGE: &str = "modulePackage";
pub const OUTPUT_FILE: &str = "outputFile";
pub const PROJECT_NAME: &str = "projectName";

/// Key/value settings handed to a generator entry point at launch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorProperties {
    values: BTreeMap<String, String>,
}

impl GeneratorProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `KEY=VALUE` at the first `=`. The value may be empty or contain `=`.
    pub fn parse_pair(pair: &str) -> Result<(String, String)> {
        match pair.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(Error::ConfigError(format!(
                "invalid property `{pair}`, expected KEY=VALUE"
            ))),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for GeneratorProperties {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair_splits_on_first_equals() {
        assert_eq!(
            GeneratorProperties::parse_pair("projectName=A=B").unwrap(),
            ("projectName".to_string(), "A=B".to_string())
        );
        assert_eq!(
            GeneratorProperties::parse_pair("outputFile=").unwrap(),
            ("outputFile".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_pair_rejects_missing_key() {
        assert!(GeneratorProperties::parse_pair("novalue").is_err());
        assert!(GeneratorProperties::parse_pair("=value").is_err());
    }

    #[test]
    fn test_later_values_win() {
        let props: GeneratorProperties = [
            ("projectName".to_string(), "First".to_string()),
            ("projectName".to_string(), "Second".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(props.get(PROJECT_NAME), Some("Second"));
        assert_eq!(props.get_or(OUTPUT_FILE, "fallback.json"), "fallback.json");
        assert_eq!(props.len(), 1);
    }
}
