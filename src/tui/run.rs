use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::PlanView;
use super::render::draw_ui;
use crate::engine::ProjectPlan;

/// Show `plan` in an interactive viewer until the user quits.
pub fn run_viewer(plan: ProjectPlan) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let mut view = PlanView::new(plan);
    let result = event_loop(&mut terminal, &mut view);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &mut PlanView,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, view))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => view.handle_key(key.code, key.modifiers),
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => view.handle_mouse_scroll(true),
                    MouseEventKind::ScrollDown => view.handle_mouse_scroll(false),
                    _ => {}
                },
                _ => {}
            }
        }

        if view.should_quit() {
            return Ok(());
        }
    }
}
