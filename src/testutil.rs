//! Shared fixtures for unit, property and integration tests.
//!
//! The sample roster mirrors a small delivery team: one worker per common
//! role, with colon-joined technology and experience columns as they appear
//! in roster exports.

use crate::model::{Task, Worker};

/// Sample roster in CSV form (header plus nine workers).
pub const SAMPLE_ROSTER_CSV: &str = "\
Name,Role,Technologies,Experience
Alice,Backend Developer,Java:Spring Boot:SQL:Node.js,4:3:5:2
Bob,Frontend Developer,React:Vue:HTML:CSS:JavaScript,5:2:6:6:5
Charlie,UI/UX Designer,Figma:AdobeXD:Sketch:Photoshop,4:3:2:5
Diana,QA Engineer,Selenium:JMeter:Postman,3:4:3
Eve,DevOps Engineer,Docker:Kubernetes:Jenkins:AWS,4:2:3:5
Frank,Project Manager,Scrum:Kanban:Jira:Communication,5:4:5:6
Grace,Business Analyst,UML:UserStories:Communication:BPMN,4:3:5:4
Henry,Technical Writer,Markdown:Confluence:Diagrams.net:MSWord,5:3:4:6
Ivy,Solution Architect,AWS:Microservices:DesignPatterns:Kubernetes,6:5:6:3
";

/// The sample roster as workers.
pub fn sample_roster() -> Vec<Worker> {
    vec![
        Worker::from_columns("Alice", "Backend Developer", "Java:Spring Boot:SQL:Node.js", "4:3:5:2"),
        Worker::from_columns("Bob", "Frontend Developer", "React:Vue:HTML:CSS:JavaScript", "5:2:6:6:5"),
        Worker::from_columns("Charlie", "UI/UX Designer", "Figma:AdobeXD:Sketch:Photoshop", "4:3:2:5"),
        Worker::from_columns("Diana", "QA Engineer", "Selenium:JMeter:Postman", "3:4:3"),
        Worker::from_columns("Eve", "DevOps Engineer", "Docker:Kubernetes:Jenkins:AWS", "4:2:3:5"),
        Worker::from_columns("Frank", "Project Manager", "Scrum:Kanban:Jira:Communication", "5:4:5:6"),
        Worker::from_columns("Grace", "Business Analyst", "UML:UserStories:Communication:BPMN", "4:3:5:4"),
        Worker::from_columns("Henry", "Technical Writer", "Markdown:Confluence:Diagrams.net:MSWord", "5:3:4:6"),
        Worker::from_columns("Ivy", "Solution Architect", "AWS:Microservices:DesignPatterns:Kubernetes", "6:5:6:3"),
    ]
}

/// A small project backlog touching most sample roles.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("Design REST API", ["Backend Developer", "Solution Architect"])
            .with_scores(7.0, 0.6, 0.9)
            .with_duration_hint(16.0),
        Task::new("Build login page", ["Frontend Developer", "UI Designer"])
            .with_scores(4.0, 0.3, 0.7)
            .with_duration_hint(12.0),
        Task::new("Set up CI pipeline", ["DevOps Engineer"])
            .with_scores(5.0, 0.4, 0.8)
            .with_duration_hint(10.0),
        Task::new("Write test plan", ["QA Engineer", "Business Analyst"])
            .with_scores(3.0, 0.2, 0.5)
            .with_duration_hint(8.0),
        Task::new("Sprint planning", ["Project Manager"])
            .with_scores(2.0, 0.1, 0.6)
            .with_duration_hint(4.0),
        Task::new("User documentation", ["Technical Writer"])
            .with_scores(2.5, 0.1, 0.3)
            .with_duration_hint(6.0),
    ]
}

/// Sample tasks in JSON, using the producer's field names.
pub const SAMPLE_TASKS_JSON: &str = r#"[
  {"task": "Design REST API", "roles": ["Backend Developer", "Solution Architect"], "complexity": 7, "risk": 0.6, "priority": 0.9, "duration": 16},
  {"task": "Build login page", "roles": ["Frontend Developer", "UI Designer"], "complexity": 4, "risk": 0.3, "priority": 0.7, "duration": 12},
  {"task": "Set up CI pipeline", "roles": "DevOps Engineer", "complexity": 5, "risk": 0.4, "priority": 0.8, "duration": 10},
  {"task": "Write test plan", "roles": "['QA Engineer', 'Business Analyst']", "complexity": 3, "risk": 0.2, "priority": 0.5, "duration": 8},
  {"task": "Sprint planning", "roles": ["Project Manager"], "complexity": 2, "risk": 0.1, "priority": 0.6, "duration": 4},
  {"task": "User documentation", "roles": ["Technical Writer"], "complexity": 2.5, "risk": 0.1, "priority": 0.3, "duration": 6}
]"#;
