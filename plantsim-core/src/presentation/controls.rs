//! Input-side validation: slider ranges, track colours and the one-line
//! command syntax used by the shell.

use super::theme::Color;
use crate::error::PlantSimError;
use plantsim_schemas::{Command, EnvironmentKey};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub key: EnvironmentKey,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderSpec {
    /// Rejects non-finite values and clamps the rest into range.
    pub fn accept(&self, value: f64) -> Result<f64, PlantSimError> {
        if !value.is_finite() {
            return Err(PlantSimError::NonFiniteInput(self.key.to_string()));
        }
        Ok(value.clamp(self.min, self.max))
    }
}

pub fn slider(key: EnvironmentKey) -> SliderSpec {
    match key {
        EnvironmentKey::Temperature => SliderSpec { key, min: -10.0, max: 50.0, step: 1.0 },
        EnvironmentKey::Water => SliderSpec { key, min: 0.0, max: 100.0, step: 5.0 },
        EnvironmentKey::Wind => SliderSpec { key, min: 0.0, max: 100.0, step: 5.0 },
    }
}

pub fn track_color(key: EnvironmentKey, value: f64) -> Color {
    match key {
        EnvironmentKey::Temperature if value <= 0.0 => Color::from_hex(0x3B82F6),
        EnvironmentKey::Temperature if value > 40.0 => Color::from_hex(0xEF4444),
        EnvironmentKey::Temperature => Color::from_hex(0xFB923C),
        EnvironmentKey::Water if value < 20.0 => Color::from_hex(0xCA8A04),
        EnvironmentKey::Water => Color::from_hex(0x0EA5E9),
        EnvironmentKey::Wind if value > 60.0 => Color::from_hex(0x64748B),
        EnvironmentKey::Wind => Color::from_hex(0x9CA3AF),
    }
}

/// Passes a command through its slider. `Reset` is always valid.
pub fn validate(command: Command) -> Result<Command, PlantSimError> {
    match command {
        Command::Set { key, value } => Ok(Command::Set {
            key,
            value: slider(key).accept(value)?,
        }),
        Command::Reset => Ok(Command::Reset),
    }
}

/// Parses `set <key> <value>` or `reset`.
pub fn parse_command(line: &str) -> Result<Command, PlantSimError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [verb] if verb.eq_ignore_ascii_case("reset") => Ok(Command::Reset),
        [verb, name, value] if verb.eq_ignore_ascii_case("set") => {
            let key = EnvironmentKey::from_name(name)
                .ok_or_else(|| PlantSimError::UnknownKey(name.to_string()))?;
            let value = value
                .parse::<f64>()
                .map_err(|_| PlantSimError::InvalidCommand(line.to_string()))?;
            Ok(Command::Set { key, value })
        }
        _ => Err(PlantSimError::InvalidCommand(line.to_string())),
    }
}
