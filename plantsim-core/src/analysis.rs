use crate::{classifier::classify, error::PlantSimError, session::state::SessionEvent};
use plantsim_schemas::{Environment, PlantStatus};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptEntry {
    pub step: u64,
    pub command: String,
    pub temperature: f64,
    pub wind: f64,
    pub water: f64,
    pub status: PlantStatus,
    pub growth: f64,
    pub events_json: String,
}

impl TranscriptEntry {
    pub fn environment(&self) -> Environment {
        Environment::new(self.temperature, self.wind, self.water)
    }

    pub fn events(&self) -> Result<Vec<SessionEvent>, PlantSimError> {
        Ok(serde_json::from_str(&self.events_json)?)
    }
}

pub fn read_transcript(path: &str) -> Result<Vec<TranscriptEntry>, PlantSimError> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| PlantSimError::CsvError(path.to_string(), e))?;
    reader
        .deserialize()
        .collect::<Result<Vec<TranscriptEntry>, _>>()
        .map_err(|e| PlantSimError::CsvError(path.to_string(), e))
}

#[derive(Debug, Default, Clone)]
pub struct TranscriptSummary {
    pub steps: u64,
    pub status_counts: HashMap<PlantStatus, u64>,
    pub status_changes: u64,
    pub resets: u64,
    pub final_status: Option<PlantStatus>,
}

pub fn summarize(entries: &[TranscriptEntry]) -> Result<TranscriptSummary, PlantSimError> {
    let mut summary = TranscriptSummary::default();

    for entry in entries {
        summary.steps = summary.steps.max(entry.step);
        *summary.status_counts.entry(entry.status).or_insert(0) += 1;
        for event in entry.events()? {
            match event {
                SessionEvent::StatusChanged { .. } => summary.status_changes += 1,
                SessionEvent::Reset => summary.resets += 1,
            }
        }
    }
    summary.final_status = entries.last().map(|e| e.status);

    Ok(summary)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusCell {
    pub temperature: f64,
    pub water: f64,
    pub status: PlantStatus,
}

/// Classification of a temperature × water grid at a fixed wind speed.
#[derive(Debug, Clone)]
pub struct StatusMap {
    pub wind: f64,
    pub temperature_range: (f64, f64),
    pub water_range: (f64, f64),
    pub step: f64,
    pub cells: Vec<StatusCell>,
}

impl StatusMap {
    pub fn count(&self, status: PlantStatus) -> usize {
        self.cells.iter().filter(|c| c.status == status).count()
    }

    /// Statuses in rule order, paired with their cell counts; zero counts omitted.
    pub fn counts(&self) -> Vec<(PlantStatus, usize)> {
        PlantStatus::ALL
            .iter()
            .map(|s| (*s, self.count(*s)))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

/// Upper bound on the number of cells a single sweep may classify.
pub const MAX_SWEEP_CELLS: usize = 1_000_000;

/// Number of grid points along one axis, or `None` if it cannot be counted.
fn axis_len(range: (f64, f64), step: f64) -> Option<usize> {
    let intervals = ((range.1 - range.0) / step).floor();
    if !intervals.is_finite() || intervals >= MAX_SWEEP_CELLS as f64 {
        return None;
    }
    (intervals as usize).checked_add(1)
}

fn axis(range: (f64, f64), step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| range.0 + i as f64 * step).collect()
}

pub fn sweep(
    wind: f64,
    temperature_range: (f64, f64),
    water_range: (f64, f64),
    step: f64,
) -> Result<StatusMap, PlantSimError> {
    if !(step.is_finite() && step > 0.0) {
        return Err(PlantSimError::InvalidSweep(format!("step must be positive, got {}", step)));
    }
    let all_finite = [wind, temperature_range.0, temperature_range.1, water_range.0, water_range.1]
        .iter()
        .all(|v| v.is_finite());
    if !all_finite {
        return Err(PlantSimError::InvalidSweep("bounds must be finite".to_string()));
    }
    if temperature_range.0 > temperature_range.1 || water_range.0 > water_range.1 {
        return Err(PlantSimError::InvalidSweep("range start exceeds range end".to_string()));
    }

    let too_large = || {
        PlantSimError::InvalidSweep(format!("step {} yields more than {} cells", step, MAX_SWEEP_CELLS))
    };
    let t_len = axis_len(temperature_range, step).ok_or_else(too_large)?;
    let w_len = axis_len(water_range, step).ok_or_else(too_large)?;
    match t_len.checked_mul(w_len) {
        Some(n) if n <= MAX_SWEEP_CELLS => {}
        _ => return Err(too_large()),
    }

    let temperatures = axis(temperature_range, step, t_len);
    let waters = axis(water_range, step, w_len);
    let mut cells = Vec::with_capacity(temperatures.len() * waters.len());
    for &temperature in &temperatures {
        for &water in &waters {
            let status = classify(Environment::new(temperature, wind, water)).status;
            cells.push(StatusCell {
                temperature,
                water,
                status,
            });
        }
    }

    tracing::debug!(wind, cells = cells.len(), "status sweep complete");
    Ok(StatusMap {
        wind,
        temperature_range,
        water_range,
        step,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_grid_size_and_contents() {
        let map = sweep(10.0, (-10.0, 50.0), (0.0, 100.0), 5.0).unwrap();
        assert_eq!(map.cells.len(), 13 * 21);
        assert!(map.count(PlantStatus::Frozen) > 0);
        assert!(map.count(PlantStatus::Fruiting) > 0);
        assert_eq!(map.count(PlantStatus::Broken), 0);
        let total: usize = map.counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, map.cells.len());
    }

    #[test]
    fn test_sweep_high_wind_has_no_fruit() {
        let map = sweep(90.0, (-10.0, 50.0), (0.0, 100.0), 1.0).unwrap();
        assert_eq!(map.count(PlantStatus::Fruiting), 0);
        assert_eq!(map.count(PlantStatus::Windy), 0);
        assert!(map.count(PlantStatus::Broken) > 0);
    }

    #[test]
    fn test_sweep_rejects_bad_step() {
        assert!(matches!(sweep(0.0, (0.0, 1.0), (0.0, 1.0), 0.0), Err(PlantSimError::InvalidSweep(_))));
        assert!(sweep(0.0, (5.0, 1.0), (0.0, 1.0), 1.0).is_err());
        assert!(sweep(f64::NAN, (0.0, 1.0), (0.0, 1.0), 1.0).is_err());
    }

    #[test]
    fn test_sweep_rejects_degenerate_step() {
        for step in [1e-300, 1e-6, f64::MIN_POSITIVE] {
            let result = sweep(10.0, (-10.0, 50.0), (0.0, 100.0), step);
            assert!(matches!(result, Err(PlantSimError::InvalidSweep(_))), "step {}", step);
        }
        // 601 x 1001 cells stays under the cap
        let map = sweep(10.0, (-10.0, 50.0), (0.0, 100.0), 0.1).unwrap();
        assert!(map.cells.len() <= MAX_SWEEP_CELLS);
    }

    #[test]
    fn test_summarize_counts_events() {
        let entry = |step, status, events: &str| TranscriptEntry {
            step,
            command: String::new(),
            temperature: 22.0,
            wind: 10.0,
            water: 80.0,
            status,
            growth: 1.0,
            events_json: events.to_string(),
        };
        let entries = vec![
            entry(0, PlantStatus::Fruiting, "[]"),
            entry(1, PlantStatus::Frozen, r#"[{"type":"status_changed","from":"fruiting","to":"frozen"}]"#),
            entry(2, PlantStatus::Fruiting, r#"[{"type":"reset"},{"type":"status_changed","from":"frozen","to":"fruiting"}]"#),
        ];
        let summary = summarize(&entries).unwrap();
        assert_eq!(summary.steps, 2);
        assert_eq!(summary.status_changes, 2);
        assert_eq!(summary.resets, 1);
        assert_eq!(summary.status_counts[&PlantStatus::Fruiting], 2);
        assert_eq!(summary.final_status, Some(PlantStatus::Fruiting));
    }
}
