use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::engine::ProjectPlan;
use crate::utilization::LoadStatus;

/// Number of lines to scroll with mouse wheel
const MOUSE_SCROLL_LINES: usize = 3;
/// Number of lines to scroll with PageUp/PageDown
const PAGE_SCROLL_LINES: usize = 10;

/// Viewer tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Assignments,
    Workload,
    Sprints,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Assignments, Tab::Workload, Tab::Sprints];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Assignments => "Assignments",
            Tab::Workload => "Workload",
            Tab::Sprints => "Sprints",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Assignments => 0,
            Tab::Workload => 1,
            Tab::Sprints => 2,
        }
    }

    fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Viewer state for one project plan.
pub struct PlanView {
    pub(super) plan: ProjectPlan,
    pub(super) tab: Tab,
    /// Scroll offset from the top, per tab.
    pub(super) scroll: [usize; 3],
    /// Whether the quit confirmation modal is showing
    pub(super) show_quit_modal: bool,
    /// Whether the user confirmed quit
    pub(super) should_quit: bool,
    pub(super) assignment_lines: Vec<Line<'static>>,
    pub(super) sprint_lines: Vec<Line<'static>>,
}

impl PlanView {
    pub fn new(plan: ProjectPlan) -> Self {
        let assignment_lines = assignment_lines(&plan);
        let sprint_lines = sprint_lines(&plan);
        Self {
            plan,
            tab: Tab::Assignments,
            scroll: [0; 3],
            show_quit_modal: false,
            should_quit: false,
            assignment_lines,
            sprint_lines,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(super) fn scroll_offset(&self) -> usize {
        self.scroll[self.tab.index()]
    }

    /// Rows the current tab can show.
    pub(super) fn content_len(&self) -> usize {
        match self.tab {
            Tab::Assignments => self.assignment_lines.len(),
            Tab::Workload => self.plan.utilization.len(),
            Tab::Sprints => self.sprint_lines.len(),
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let max_scroll = self.content_len().saturating_sub(1);
        let slot = &mut self.scroll[self.tab.index()];
        *slot = if delta < 0 {
            slot.saturating_sub(delta.unsigned_abs())
        } else {
            (*slot + delta as usize).min(max_scroll)
        };
    }

    /// Handle a key event.
    pub(super) fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if self.show_quit_modal {
            match key {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.show_quit_modal = false;
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.show_quit_modal = true;
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.show_quit_modal = true;
            }
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.previous(),
            KeyCode::Char('1') => self.tab = Tab::Assignments,
            KeyCode::Char('2') => self.tab = Tab::Workload,
            KeyCode::Char('3') => self.tab = Tab::Sprints,
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(PAGE_SCROLL_LINES as isize)),
            KeyCode::PageDown => self.scroll_by(PAGE_SCROLL_LINES as isize),
            KeyCode::Home => self.scroll[self.tab.index()] = 0,
            KeyCode::End => {
                self.scroll[self.tab.index()] = self.content_len().saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Handle mouse scroll event.
    pub(super) fn handle_mouse_scroll(&mut self, up: bool) {
        if self.show_quit_modal {
            return;
        }
        let lines = MOUSE_SCROLL_LINES as isize;
        self.scroll_by(if up { -lines } else { lines });
    }
}

/// Terminal color for a load status.
pub(super) fn status_color(status: LoadStatus) -> Color {
    match status {
        LoadStatus::Overloaded => Color::Red,
        LoadStatus::HighLoad => Color::Yellow,
        LoadStatus::Normal => Color::Green,
        LoadStatus::LightLoad => Color::Cyan,
    }
}

fn assignment_lines(plan: &ProjectPlan) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for assignment in &plan.assignments {
        let task = &assignment.task;
        lines.push(Line::from(vec![
            Span::styled(
                task.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  priority {:.2}  complexity {:.1}  risk {:.2}  {:.2}h",
                    task.priority,
                    task.complexity,
                    task.risk,
                    task.estimated_hours()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        if assignment.workers.is_empty() {
            lines.push(Line::from(Span::styled(
                "    no qualified worker",
                Style::default().fg(Color::Red),
            )));
        }
        for worker in &assignment.workers {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {:<12}", worker.name),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(
                    "S {:>6.2}  W {:.3}  C {:.3}  Y {:>6.2}  {:>7.2}h",
                    worker.skill_score,
                    worker.workload_factor,
                    worker.complexity_fit,
                    worker.combined_score,
                    worker.allocated_hours
                )),
            ]));
        }
    }
    lines
}

fn sprint_lines(plan: &ProjectPlan) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for sprint in &plan.sprints.sprints {
        lines.push(Line::from(Span::styled(
            format!("Sprint {}  ({:.1}h)", sprint.index, sprint.total_hours),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for task in &sprint.tasks {
            lines.push(Line::from(format!(
                "    {:<40} {:>7.2}h",
                task.name,
                task.sprint_hours()
            )));
        }
    }
    if plan.sprints.truncated {
        lines.push(Line::from(Span::styled(
            format!(
                "Sprint limit reached: {} task(s) not placed",
                plan.sprints.unplaced.len()
            ),
            Style::default().fg(Color::Yellow),
        )));
        for task in &plan.sprints.unplaced {
            lines.push(Line::from(Span::styled(
                format!("    {}", task.name),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    lines
}
