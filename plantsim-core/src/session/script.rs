use crate::error::PlantSimError;
use plantsim_schemas::file_formats::ScriptFile;
use std::{fs, path::Path};

/// Reads a YAML command script.
pub fn load_script(path: impl AsRef<Path>) -> Result<ScriptFile, PlantSimError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| PlantSimError::FileIO(display.clone(), e))?;
    parse_script(&display, &content)
}

pub fn parse_script(source: &str, content: &str) -> Result<ScriptFile, PlantSimError> {
    serde_yaml::from_str(content).map_err(|e| PlantSimError::YamlParsing(source.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantsim_schemas::{Command, EnvironmentKey};

    #[test]
    fn test_parse_script() {
        let yaml = r#"
schema_version: "1.0"
name: cold snap
commands:
  - type: set
    key: temperature
    value: -5
  - type: reset
"#;
        let script = parse_script("inline", yaml).unwrap();
        assert_eq!(script.name.as_deref(), Some("cold snap"));
        assert_eq!(
            script.commands,
            vec![
                Command::Set { key: EnvironmentKey::Temperature, value: -5.0 },
                Command::Reset,
            ]
        );
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let yaml = "schema_version: \"1.0\"\ncommands:\n  - type: set\n    key: humidity\n    value: 3\n";
        let err = parse_script("inline", yaml).unwrap_err();
        assert!(matches!(err, PlantSimError::YamlParsing(ref source, _) if source == "inline"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_script("/nonexistent/plantsim/script.yaml").unwrap_err();
        assert!(matches!(err, PlantSimError::FileIO(_, _)));
    }
}
