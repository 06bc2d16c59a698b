use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Tabs},
    Frame,
};

use super::app::{status_color, PlanView, Tab};

/// Padding inside content area (1 cell on each side)
const CONTENT_PADDING: u16 = 1;
/// Rows taken by one workload gauge.
const GAUGE_HEIGHT: u16 = 1;

/// Draw the UI.
pub(super) fn draw_ui(f: &mut Frame, view: &PlanView) {
    let size = f.area();
    f.render_widget(Clear, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Summary
        ])
        .split(size);

    draw_tabs(f, chunks[0], view);
    match view.tab {
        Tab::Assignments => draw_lines(f, chunks[1], view, &view.assignment_lines),
        Tab::Workload => draw_workload(f, chunks[1], view),
        Tab::Sprints => draw_lines(f, chunks[1], view, &view.sprint_lines),
    }
    draw_summary(f, chunks[2], view);

    if view.show_quit_modal {
        draw_quit_modal(f, size);
    }
}

fn draw_tabs(f: &mut Frame, area: Rect, view: &PlanView) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} {} ", tab.index() + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(view.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" allot ")
                .title_style(Style::default().fg(Color::White)),
        );

    f.render_widget(tabs, area);
}

fn content_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title)
        .title_style(Style::default().fg(Color::White))
}

fn inner(area: Rect) -> Rect {
    area.inner(Margin {
        horizontal: CONTENT_PADDING + 1,
        vertical: CONTENT_PADDING + 1,
    })
}

/// Draw a scrollable list of prepared lines.
fn draw_lines(f: &mut Frame, area: Rect, view: &PlanView, lines: &[Line<'static>]) {
    let total = lines.len();
    let start = view.scroll_offset().min(total);
    let title = format!(
        " {} ({}/{}) [\u{2191}\u{2193} scroll, Tab switch, q quit] ",
        view.tab.title(),
        (start + 1).min(total),
        total
    );
    f.render_widget(content_block(title), area);

    let inner_area = inner(area);
    let height = inner_area.height as usize;
    let end = (start + height).min(total);
    f.render_widget(Paragraph::new(lines[start..end].to_vec()), inner_area);
}

/// Draw one gauge per worker, colored by load status.
fn draw_workload(f: &mut Frame, area: Rect, view: &PlanView) {
    let entries = &view.plan.utilization;
    let total = entries.len();
    let start = view.scroll_offset().min(total);
    let title = format!(
        " Workload ({} workers, {:.0}h per worker) ",
        total,
        view.plan.capacity_per_worker
    );
    f.render_widget(content_block(title), area);

    let inner_area = inner(area);
    let rows = (inner_area.height / GAUGE_HEIGHT) as usize;
    let visible = &entries[start..(start + rows).min(total)];
    if visible.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(GAUGE_HEIGHT); visible.len()])
        .split(inner_area);

    for (entry, row) in visible.iter().zip(chunks.iter()) {
        let label = format!(
            "{:<10} {:>7.2}h  {:>6.1}%  {}",
            entry.name, entry.committed_hours, entry.utilization_percent, entry.status
        );
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(status_color(entry.status)))
            .ratio((entry.utilization_percent / 100.0).clamp(0.0, 1.0))
            .label(label);
        f.render_widget(gauge, *row);
    }
}

fn draw_summary(f: &mut Frame, area: Rect, view: &PlanView) {
    let plan = &view.plan;
    let staffed = plan.assignments.iter().filter(|a| a.is_staffed()).count();
    let mut spans = vec![
        Span::raw(format!(
            " {} tasks, {} staffed, {:.2}h estimated, {} sprint(s) ",
            plan.assignments.len(),
            staffed,
            plan.total_estimated_hours,
            plan.sprints.sprints.len()
        )),
    ];
    if plan.sprints.truncated {
        spans.push(Span::styled(
            format!("{} unplaced ", plan.sprints.unplaced.len()),
            Style::default().fg(Color::Yellow),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Draw the quit confirmation modal.
fn draw_quit_modal(f: &mut Frame, area: Rect) {
    let modal_width = 36u16;
    let modal_height = 6u16;
    let x = (area.width.saturating_sub(modal_width)) / 2;
    let y = (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(
        x,
        y,
        modal_width.min(area.width),
        modal_height.min(area.height),
    );

    f.render_widget(Clear, modal_area);

    let modal_text = vec![
        Line::from(""),
        Line::from("Close the plan viewer?"),
        Line::from(""),
        Line::from(Span::styled("[Y]es  [N]o", Style::default().fg(Color::Cyan))),
    ];

    let modal = Paragraph::new(modal_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Quit? ")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        );

    f.render_widget(modal, modal_area);
}
