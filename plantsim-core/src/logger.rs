use crate::session::state::SessionState;
use csv::Writer;
use plantsim_schemas::PlantStatus;
use serde::Serialize;
use std::fs;

#[derive(Debug, Serialize)]
struct TranscriptRow<'a> {
    step: u64,
    command: &'a str,
    temperature: f64,
    wind: f64,
    water: f64,
    status: PlantStatus,
    growth: f64,
    events_json: String,
}

/// Writes one CSV row per session step.
pub struct TranscriptLogger {
    writer: Writer<fs::File>,
}

impl TranscriptLogger {
    pub fn new(path: &str) -> Result<Self, csv::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_state(&mut self, state: &SessionState, command: &str) -> Result<(), anyhow::Error> {
        let events_json = serde_json::to_string(&state.events)?;

        let row = TranscriptRow {
            step: state.step,
            command,
            temperature: state.environment.temperature,
            wind: state.environment.wind,
            water: state.environment.water,
            status: state.plant.status,
            growth: state.plant.growth,
            events_json,
        };

        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }
}
