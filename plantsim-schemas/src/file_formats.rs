use crate::command::Command;
use serde::Deserialize;

/// A replayable sequence of commands, as stored in a YAML script.
#[derive(Debug, Deserialize)]
pub struct ScriptFile {
    pub schema_version: String,
    #[serde(default)]
    pub name: Option<String>,
    pub commands: Vec<Command>,
}
