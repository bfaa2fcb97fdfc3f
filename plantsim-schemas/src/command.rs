use crate::environment::EnvironmentKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user gesture against the environment store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Set { key: EnvironmentKey, value: f64 },
    Reset,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Set { key, value } => write!(f, "set {} {}", key, value),
            Command::Reset => f.write_str("reset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_json_form() {
        let cmd: Command =
            serde_json::from_str(r#"{"type":"set","key":"water","value":35.0}"#).unwrap();
        assert_eq!(cmd, Command::Set { key: EnvironmentKey::Water, value: 35.0 });

        let reset: Command = serde_json::from_str(r#"{"type":"reset"}"#).unwrap();
        assert_eq!(reset, Command::Reset);
    }

    #[test]
    fn test_display() {
        let cmd = Command::Set { key: EnvironmentKey::Temperature, value: -5.0 };
        assert_eq!(cmd.to_string(), "set temperature -5");
        assert_eq!(Command::Reset.to_string(), "reset");
    }
}
