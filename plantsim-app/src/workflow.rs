use crate::plotting;
use anyhow::{Context, Result};
use plantsim_core::{
    analysis::{self, StatusMap},
    classify,
    presentation::{labels, parse_command, status_label, validate, Locale},
    session::{script::load_script, SessionBuilder},
    EnvironmentStore,
};
use plantsim_schemas::{Environment, EnvironmentKey, PlantState};
use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

/// One-line human description of the current snapshot.
pub fn describe(environment: Environment, plant: PlantState, locale: Locale) -> String {
    let readings = EnvironmentKey::ALL
        .iter()
        .map(|key| {
            format!(
                "{} {} {}",
                labels::key_label(*key, locale),
                environment.get(*key),
                labels::unit_label(*key, locale)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} (growth x{:.2}) | {}",
        status_label(plant.status, locale),
        plant.growth,
        readings
    )
}

pub fn run_classify(environment: Environment, locale: Locale, json: bool) -> Result<()> {
    let plant = classify(environment);
    if json {
        println!("{}", serde_json::to_string_pretty(&plant)?);
    } else {
        println!("{}", describe(environment, plant, locale));
    }
    Ok(())
}

/// Line-oriented front end over an [`EnvironmentStore`].
///
/// Accepts `set <key> <value>`, `reset`, `show`, `help` and `quit`. Bad lines
/// are reported and the loop carries on.
pub fn run_shell<R: BufRead, W: Write>(input: R, mut out: W, locale: Locale) -> Result<()> {
    let mut store = EnvironmentStore::new();
    writeln!(out, "{}", labels::title(locale))?;
    writeln!(out, "{}", describe(store.environment(), store.plant_state(), locale))?;

    for line in input.lines() {
        let line = line.context("Failed to read from input")?;
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "show" => {}
            "help" => {
                writeln!(out, "commands: set <temperature|wind|water> <value>, reset, show, quit")?;
                continue;
            }
            _ => match parse_command(trimmed).and_then(validate) {
                Ok(command) => {
                    store.apply(command);
                }
                Err(e) => {
                    tracing::warn!("rejected input '{}': {}", trimmed, e);
                    writeln!(out, "error: {}", e)?;
                    continue;
                }
            },
        }
        writeln!(out, "{}", describe(store.environment(), store.plant_state(), locale))?;
    }
    Ok(())
}

/// Replays a command script into a fresh run directory and writes its transcript.
pub fn run_script(script_path: &Path, output_root: &Path, locale: Locale) -> Result<PathBuf> {
    println!("\n--- [Workflow] Replaying '{}' ---", script_path.display());

    let script = load_script(script_path)?;
    let commands = script
        .commands
        .iter()
        .map(|c| validate(*c))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid command in {:?}", script_path))?;

    let output_dir = output_root.join(format!(
        "{}_{}",
        run_label(script.name.as_deref()),
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;
    // Keep the script next to its transcript for traceability.
    fs::copy(script_path, output_dir.join("script.yaml"))?;

    let transcript_path = output_dir.join("transcript.csv");
    let transcript_str = transcript_path.to_string_lossy().to_string();
    let mut session = SessionBuilder::new()
        .with_transcript_to_file(&transcript_str)
        .build()?;
    let plant = session.replay(&commands)?;
    drop(session);

    let summary = analysis::summarize(&analysis::read_transcript(&transcript_str)?)?;
    println!(
        "Steps: {} | status changes: {} | resets: {}",
        summary.steps, summary.status_changes, summary.resets
    );
    println!("Final state: {} (growth x{:.2})", status_label(plant.status, locale), plant.growth);
    println!("Transcript written to '{}'", transcript_path.display());

    Ok(output_dir)
}

/// Directory-safe label for a run: only ASCII letters, digits, `_` and `-`.
fn run_label(name: Option<&str>) -> String {
    let label: String = name
        .unwrap_or_default()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    if label.trim_matches('_').is_empty() {
        "session".to_string()
    } else {
        label
    }
}

pub fn run_map(wind: f64, step: f64, output_root: &Path, locale: Locale) -> Result<()> {
    let map = build_map(wind, step)?;
    fs::create_dir_all(output_root)
        .with_context(|| format!("Failed to create output directory: {:?}", output_root))?;

    write_map_csv(&map, &output_root.join("status_map.csv"))?;
    plotting::plot_status_map(output_root, &map, locale)?;

    for (status, count) in map.counts() {
        println!("{:>10}: {} cells", status_label(status, locale), count);
    }
    println!("Status map saved to '{}'", output_root.display());
    Ok(())
}

/// Status map over the full slider range at the given wind.
pub fn build_map(wind: f64, step: f64) -> Result<StatusMap> {
    let temperature = plantsim_core::presentation::slider(EnvironmentKey::Temperature);
    let water = plantsim_core::presentation::slider(EnvironmentKey::Water);
    let wind = plantsim_core::presentation::slider(EnvironmentKey::Wind).accept(wind)?;
    Ok(analysis::sweep(
        wind,
        (temperature.min, temperature.max),
        (water.min, water.max),
        step,
    )?)
}

fn write_map_csv(map: &StatusMap, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {:?}", path))?;
    writer.write_record(["temperature", "wind", "water", "status"])?;
    for cell in &map.cells {
        writer.write_record([
            cell.temperature.to_string(),
            map.wind.to_string(),
            cell.water.to_string(),
            cell.status.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn run_render(environment: Environment, output_root: &Path, locale: Locale) -> Result<()> {
    let plant = classify(environment);
    fs::create_dir_all(output_root)
        .with_context(|| format!("Failed to create output directory: {:?}", output_root))?;
    let path = plotting::render_plant(output_root, plant, locale)?;
    println!("{}", describe(environment, plant, locale));
    println!("Plant rendered to '{}'", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn shell(input: &str) -> String {
        let mut out = Vec::new();
        run_shell(Cursor::new(input), &mut out, Locale::English).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_shell_prints_state_after_each_command() {
        let output = shell("set temperature -3\nset water 5\nreset\nquit\nset wind 90\n");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("Fruiting"));
        assert!(lines[2].starts_with("Frozen"));
        // still frozen: freezing outranks drought
        assert!(lines[3].starts_with("Frozen"));
        assert!(lines[4].starts_with("Fruiting"));
    }

    #[test]
    fn test_shell_reports_bad_input_and_continues() {
        let output = shell("set sunlight 3\nset wind NaN\nshow\n");
        assert!(output.contains("error: Unknown environment parameter 'sunlight'"));
        assert!(output.contains("error: Value for 'wind' must be a finite number"));
        assert!(output.lines().last().unwrap().starts_with("Fruiting"));
    }

    #[test]
    fn test_shell_clamps_to_slider_range() {
        let output = shell("set wind 500\n");
        assert!(output.lines().last().unwrap().starts_with("Broken"));
        assert!(output.contains("Wind speed 100 km/h"));
    }

    #[test]
    fn test_describe_arabic() {
        let text = describe(Environment::INITIAL, classify(Environment::INITIAL), Locale::Arabic);
        assert!(text.starts_with("مثمر"));
        assert!(text.contains("x1.20"));
    }

    #[test]
    fn test_run_script_writes_transcript() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("storm.yaml");
        fs::write(
            &script_path,
            "schema_version: \"1.0\"\nname: storm\ncommands:\n  - { type: set, key: wind, value: 70 }\n  - { type: set, key: wind, value: 95 }\n",
        )
        .unwrap();

        let run_dir = run_script(&script_path, dir.path(), Locale::English).unwrap();
        assert!(run_dir.join("script.yaml").exists());
        let entries =
            analysis::read_transcript(run_dir.join("transcript.csv").to_str().unwrap()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].status, plantsim_schemas::PlantStatus::Broken);
    }

    #[test]
    fn test_run_label_stays_inside_output_root() {
        assert_eq!(run_label(Some("cold snap")), "cold_snap");
        assert_eq!(run_label(Some("../../etc/x")), "______etc_x");
        assert_eq!(run_label(Some("a/b\\c")), "a_b_c");
        assert_eq!(run_label(Some("..")), "session");
        assert_eq!(run_label(None), "session");
    }

    #[test]
    fn test_run_script_keeps_run_dir_under_output_root() {
        let dir = tempfile::tempdir().unwrap();
        let output_root = dir.path().join("runs");
        let script_path = dir.path().join("escape.yaml");
        fs::write(
            &script_path,
            "schema_version: \"1.0\"\nname: ../outside\ncommands:\n  - { type: reset }\n",
        )
        .unwrap();

        let run_dir = run_script(&script_path, &output_root, Locale::English).unwrap();
        assert_eq!(run_dir.parent(), Some(output_root.as_path()));
        assert!(run_dir.file_name().unwrap().to_str().unwrap().starts_with("___outside_"));
    }

    #[test]
    fn test_build_map_clamps_wind() {
        let map = build_map(250.0, 5.0).unwrap();
        assert_eq!(map.wind, 100.0);
        assert_eq!(map.cells.len(), 13 * 21);
    }
}
