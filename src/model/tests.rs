use super::*;

#[test]
fn test_parse_role_list_python_style() {
    assert_eq!(
        parse_role_list("['Backend Developer', 'QA Engineer']"),
        vec!["Backend Developer", "QA Engineer"]
    );
}

#[test]
fn test_parse_role_list_plain_and_single() {
    assert_eq!(
        parse_role_list("Backend Developer, QA Engineer"),
        vec!["Backend Developer", "QA Engineer"]
    );
    assert_eq!(parse_role_list("DevOps Engineer"), vec!["DevOps Engineer"]);
    assert!(parse_role_list("[]").is_empty());
    assert!(parse_role_list(" , ").is_empty());
}

#[test]
fn test_worker_from_columns() {
    let worker = Worker::from_columns("Alice", "Backend Developer", "Java:Spring Boot:SQL", "4:3:5");
    assert_eq!(worker.name, "Alice");
    assert_eq!(worker.technologies(), ["Java", "Spring Boot", "SQL"]);
    assert_eq!(worker.experience(), [4.0, 3.0, 5.0]);
}

#[test]
fn test_worker_unparsable_experience_uses_neutral() {
    let worker = Worker::from_columns("Bob", "Frontend Developer", "React:Vue", "5:lots");
    assert_eq!(worker.experience(), [NEUTRAL_EXPERIENCE, NEUTRAL_EXPERIENCE]);
}

#[test]
fn test_worker_length_mismatch_uses_neutral() {
    let worker = Worker::new(
        "Eve",
        "DevOps Engineer",
        vec!["Docker".into(), "AWS".into(), "Jenkins".into()],
        vec![4.0, 2.0],
    );
    assert_eq!(worker.experience(), [1.0, 1.0, 1.0]);
}

#[test]
fn test_worker_negative_experience_uses_neutral() {
    let worker = Worker::new("Ivy", "Architect", vec!["AWS".into()], vec![-3.0]);
    assert_eq!(worker.experience(), [1.0]);
}

#[test]
fn test_worker_experience_stats() {
    let worker = Worker::new("Alice", "Backend", vec!["Java".into(), "SQL".into()], vec![4.0, 5.0]);
    assert_eq!(worker.average_experience(), Some(4.5));
    assert_eq!(worker.max_experience(), Some(5.0));

    let empty = Worker::new("Nobody", "Intern", Vec::new(), Vec::new());
    assert_eq!(empty.average_experience(), None);
    assert_eq!(empty.max_experience(), None);
}

#[test]
fn test_worker_deserialize_list_form() {
    let json = r#"{"name":"Alice","role":"Backend Developer","technologies":["Java","SQL"],"experience":[4,5]}"#;
    let worker: Worker = serde_json::from_str(json).unwrap();
    assert_eq!(worker.technologies(), ["Java", "SQL"]);
    assert_eq!(worker.experience(), [4.0, 5.0]);
}

#[test]
fn test_worker_deserialize_export_form() {
    let json = r#"{"Name":"Diana","Role":"QA Engineer","Technologies":"Selenium:JMeter:Postman","Experience":"3:4:3"}"#;
    let worker: Worker = serde_json::from_str(json).unwrap();
    assert_eq!(worker.name, "Diana");
    assert_eq!(worker.technologies(), ["Selenium", "JMeter", "Postman"]);
    assert_eq!(worker.experience(), [3.0, 4.0, 3.0]);
}

#[test]
fn test_task_deserialize_aliases() {
    let json = r#"{"task":"Build API","roles":"['Backend Developer']","complexity":6,"risk":0.4,"priority":0.9,"duration":"Unknown"}"#;
    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.name, "Build API");
    assert_eq!(task.required_roles, vec!["Backend Developer"]);
    assert_eq!(task.complexity, 6.0);
    assert_eq!(task.duration_hint, None);
    assert_eq!(task.estimated_time, None);
}

#[test]
fn test_task_deserialize_numeric_duration_string() {
    let json = r#"{"name":"Docs","required_roles":["Technical Writer"],"duration":"12.5"}"#;
    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.duration_hint, Some(12.5));
}

#[test]
fn test_task_hours_defaults() {
    let task = Task::new("Plain", ["QA Engineer"]);
    assert_eq!(task.estimated_hours(), 0.0);
    assert_eq!(task.sprint_hours(), DEFAULT_SPRINT_TASK_HOURS);

    let estimated = task.clone().with_estimated_time(14.0);
    assert_eq!(estimated.sprint_hours(), 14.0);

    let hinted = estimated.with_duration_hint(6.0);
    assert_eq!(hinted.sprint_hours(), 6.0);
    assert_eq!(hinted.estimated_hours(), 14.0);
}

#[test]
fn test_task_validate_rejects_non_finite() {
    let task = Task::new("Bad", ["QA"]).with_scores(f64::NAN, 0.1, 0.1);
    assert!(task.validate().is_err());

    let task = Task::new("Bad hours", ["QA"]).with_estimated_time(-1.0);
    assert!(task.validate().is_err());

    let task = Task::new("Fine", ["QA"]).with_scores(5.0, 0.5, 0.5);
    assert!(task.validate().is_ok());
}
