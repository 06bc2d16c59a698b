use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

use allot::config::{self, Config};
use allot::engine::{Engine, EngineConfig};
use allot::journal::Journal;
use allot::matcher::{KeywordMatcher, RoleSkillTable};
use allot::roster;
use allot::testutil::{SAMPLE_ROSTER_CSV, SAMPLE_TASKS_JSON};
use allot::utilization::LoadStatus;

/// Strip ANSI escape codes from a string.
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until we hit a letter (which ends the escape sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Write the sample roster and tasks under their default names.
fn write_inputs(dir: &Path) {
    fs::write(dir.join("roster.csv"), SAMPLE_ROSTER_CSV).expect("write roster");
    fs::write(dir.join("tasks.json"), SAMPLE_TASKS_JSON).expect("write tasks");
}

fn allot(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_allot"))
        .args(args)
        .current_dir(dir)
        .env_remove("ALLOT_LOG")
        .env_remove("ALLOT_MAX_SPRINTS")
        .env_remove("ALLOT_SPRINT_CAPACITY")
        .output()
        .expect("failed to run allot")
}

fn run_success(dir: &Path, args: &[&str]) -> String {
    let output = allot(dir, args);
    assert!(
        output.status.success(),
        "allot {:?} failed\nstdout:\n{}\nstderr:\n{}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    strip_ansi(&String::from_utf8_lossy(&output.stdout))
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let stdout = run_success(dir, args);
    serde_json::from_str(&stdout).expect("stdout is JSON")
}

#[test]
fn test_library_pipeline_from_files() {
    let temp = TempDir::new().expect("temp dir");
    write_inputs(temp.path());

    let workers = roster::load_roster(temp.path().join("roster.csv")).unwrap();
    let tasks = roster::load_tasks(temp.path().join("tasks.json")).unwrap();
    assert_eq!(workers.len(), 9);
    assert_eq!(tasks.len(), 6);

    let mut engine = Engine::new(EngineConfig::default(), workers).unwrap();
    let plan = engine.plan(&tasks).unwrap();

    assert!(plan.tasks.iter().all(|t| t.estimated_time.is_some()));
    assert_eq!(plan.sprints.task_count(), tasks.len());
    assert!(plan.unstaffed().count() < tasks.len());
    for entry in &plan.utilization {
        assert_eq!(entry.status, LoadStatus::from_percent(entry.utilization_percent));
    }
}

#[test]
fn test_ledger_carries_over_between_batches() {
    let temp = TempDir::new().expect("temp dir");
    write_inputs(temp.path());
    let workers = roster::load_roster(temp.path().join("roster.csv")).unwrap();
    let tasks = roster::load_tasks(temp.path().join("tasks.json")).unwrap();

    let mut engine = Engine::new(EngineConfig::default(), workers).unwrap();
    let first = engine.plan(&tasks).unwrap();
    let after_first = engine.ledger().total();
    let second = engine.plan(&tasks).unwrap();

    let second_hours: f64 = second.assignments.iter().map(|a| a.allocated_hours()).sum();
    assert!((engine.ledger().total() - after_first - second_hours).abs() < 1e-9);

    let first_hours: f64 = first.assignments.iter().map(|a| a.allocated_hours()).sum();
    assert!((after_first - first_hours).abs() < 1e-9);

    engine.reset();
    assert!(engine.utilization().is_empty());
}

#[test]
fn test_custom_knowledge_base_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("roles.toml");
    fs::write(
        &path,
        "version = 1\n\n[roles]\n\"release captain\" = [\"jenkins\", \"docker\"]\n",
    )
    .unwrap();

    let table = RoleSkillTable::load(&path).unwrap();
    assert_eq!(table.len(), 1);

    let workers = roster::parse_roster_csv(SAMPLE_ROSTER_CSV).unwrap();
    let tasks = vec![allot::Task::new("Cut release", ["Release Captain"]).with_scores(3.0, 0.2, 0.5)];
    let mut engine = Engine::new(EngineConfig::default(), workers)
        .unwrap()
        .with_matcher(KeywordMatcher::new(table));
    let assignments = engine.allocate(&tasks).unwrap();

    assert_eq!(assignments[0].workers[0].name, "Eve");
}

#[test]
fn test_journal_rotation_keeps_recent_lines() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("logs").join("allot.log");
    let journal = Journal::new(&path, "abc123").with_max_lines(3);

    for i in 0..3 {
        journal.record("plan", &format!("run {}", i)).unwrap();
    }
    let lines = journal.read_all().unwrap();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].ends_with("| abc123 | plan | run 2"));

    // The fourth line pushes the journal past its limit.
    journal.record("plan", "run 3").unwrap();
    assert!(journal.read_all().unwrap().is_empty());

    let backups: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.to_string_lossy().ends_with(".bak"))
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(&backups[0]).unwrap().lines().count(), 4);
}

#[test]
fn test_config_file_feeds_engine_config() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("allot.toml");
    fs::write(&path, "[allocation]\ncapacity_per_worker = 80\n\n[sprints]\nmax = 3\n").unwrap();

    let cli = config::parse_args(vec![
        "allot".to_string(),
        "-c".to_string(),
        path.display().to_string(),
        "--threshold".to_string(),
        "0.5".to_string(),
    ]);
    let engine_config = Config::load(&cli).unwrap().engine_config();
    assert_eq!(engine_config.capacity_per_worker, 80.0);
    assert_eq!(engine_config.max_sprints, 3);
    assert_eq!(engine_config.acceptance_threshold, 0.5);
}

#[test]
fn test_cli_plan_text_report() {
    let temp = TempDir::new().expect("temp dir");
    write_inputs(temp.path());

    let stdout = run_success(temp.path(), &[]);
    assert!(stdout.contains("Assignments"));
    assert!(stdout.contains("Design REST API"));
    assert!(stdout.contains("Utilization"));
    assert!(stdout.contains("Sprint 1"));
    assert!(stdout.contains("Sprint 2"));
    assert!(stdout.contains("PLAN SUMMARY"));
}

#[test]
fn test_cli_plan_json() {
    let temp = TempDir::new().expect("temp dir");
    write_inputs(temp.path());

    let plan = run_json(temp.path(), &["plan", "--json"]);
    assert_eq!(plan["tasks"].as_array().unwrap().len(), 6);
    assert_eq!(plan["assignments"].as_array().unwrap().len(), 6);
    assert_eq!(plan["sprints"]["sprints"].as_array().unwrap().len(), 2);
    assert_eq!(plan["sprints"]["truncated"], Value::Bool(false));
    assert_eq!(plan["capacity_per_worker"].as_f64(), Some(160.0));

    let first = &plan["assignments"][0];
    assert_eq!(first["task"]["name"], "Design REST API");
    assert!(first["workers"][0]["combined_score"].as_f64().unwrap() > 0.1);
}

#[test]
fn test_cli_allocate_and_estimate_json() {
    let temp = TempDir::new().expect("temp dir");
    write_inputs(temp.path());

    let report = run_json(temp.path(), &["allocate", "--json"]);
    let committed: f64 = report["utilization"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["committed_hours"].as_f64().unwrap())
        .sum();
    let assigned: f64 = report["assignments"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|a| a["workers"].as_array().unwrap().clone())
        .map(|w| w["allocated_hours"].as_f64().unwrap())
        .sum();
    assert!((committed - assigned).abs() < 1e-6);

    let tasks = run_json(temp.path(), &["estimate", "--json"]);
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 6);
    assert!(tasks.iter().all(|t| t["estimated_time"].as_f64().unwrap() > 0.0));
}

#[test]
fn test_cli_config_precedence_for_sprints() {
    let temp = TempDir::new().expect("temp dir");
    write_inputs(temp.path());
    fs::write(temp.path().join("allot.toml"), "[sprints]\ncapacity = 20\n").unwrap();

    let plan = run_json(temp.path(), &["sprints", "--json"]);
    assert_eq!(plan["sprints"].as_array().unwrap().len(), 4);

    let plan = run_json(temp.path(), &["sprints", "--json", "--sprint-capacity", "100"]);
    assert_eq!(plan["sprints"].as_array().unwrap().len(), 1);

    let output = Command::new(env!("CARGO_BIN_EXE_allot"))
        .args(["sprints", "--json"])
        .current_dir(temp.path())
        .env("ALLOT_MAX_SPRINTS", "1")
        .output()
        .expect("failed to run allot");
    assert!(output.status.success());
    let plan: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["sprints"].as_array().unwrap().len(), 1);
    assert_eq!(plan["truncated"], Value::Bool(true));
    assert_eq!(plan["unplaced"].as_array().unwrap().len(), 5);
}

#[test]
fn test_cli_roles() {
    let temp = TempDir::new().expect("temp dir");

    let roles = run_json(temp.path(), &["roles", "--json"]);
    assert_eq!(roles["version"], 1);
    assert_eq!(roles["roles"].as_object().unwrap().len(), 17);

    let stdout = run_success(temp.path(), &["roles"]);
    assert!(stdout.contains("backend developer"));
}

#[test]
fn test_cli_init_writes_config_once() {
    let temp = TempDir::new().expect("temp dir");

    let stdout = run_success(temp.path(), &["init"]);
    assert!(stdout.contains("Created allot.toml"));
    let written = fs::read_to_string(temp.path().join("allot.toml")).unwrap();
    assert!(written.contains("[allocation]"));

    let stdout = run_success(temp.path(), &["init"]);
    assert!(stdout.contains("already exists"));
}

#[test]
fn test_cli_journal_records_runs() {
    let temp = TempDir::new().expect("temp dir");
    write_inputs(temp.path());

    run_success(temp.path(), &["plan", "--journal", "allot.log"]);
    run_success(temp.path(), &["sprints", "--journal", "allot.log"]);

    let content = fs::read_to_string(temp.path().join("allot.log")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(" | plan | 6 tasks"));
    assert!(lines[1].contains(" | sprints | 2 sprint(s)"));
}

#[test]
fn test_cli_errors_exit_nonzero() {
    let temp = TempDir::new().expect("temp dir");

    let output = allot(temp.path(), &["frobnicate"]);
    assert!(!output.status.success());
    let stderr = strip_ansi(&String::from_utf8_lossy(&output.stderr));
    assert!(stderr.contains("unknown command: frobnicate"), "stderr:\n{}", stderr);

    let output = allot(temp.path(), &["plan"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("tasks.json"), "stderr:\n{}", stderr);

    let output = allot(temp.path(), &["plan", "-c", "missing.toml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config I/O error"));
}

#[test]
fn test_cli_rejects_zero_sprint_limit() {
    let temp = TempDir::new().expect("temp dir");
    write_inputs(temp.path());

    let output = allot(temp.path(), &["sprints", "--max-sprints", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max_sprints must be at least 1"), "stderr:\n{}", stderr);
}

#[test]
fn test_cli_roster_with_byte_order_mark() {
    let temp = TempDir::new().expect("temp dir");
    write_inputs(temp.path());
    fs::write(
        temp.path().join("roster.csv"),
        format!("\u{feff}{}", SAMPLE_ROSTER_CSV),
    )
    .expect("write roster");

    let plan = run_json(temp.path(), &["allocate", "--json"]);
    let names: Vec<&str> = plan["utilization"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert!(!names.iter().any(|n| n.contains("Name")), "header read as a worker: {:?}", names);
}

#[test]
fn test_cli_help_and_version() {
    let temp = TempDir::new().expect("temp dir");
    let stdout = run_success(temp.path(), &["--help"]);
    assert!(stdout.contains("USAGE:"));
    assert!(stdout.contains("--max-sprints"));

    let stdout = run_success(temp.path(), &["--version"]);
    assert!(stdout.starts_with("allot "));
}
