//! Terminal screen: setup, run loop, and rendering.

pub mod app;
pub mod binding;
pub mod events;
pub mod handlers;
pub mod theme;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::theme::{BUTTON_FILL, BUTTON_TEXT, GLOBAL_BORDER, HEADER_TEXT, NAME_ACCENT};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};
use std::io;
use std::io::Stdout;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const BUTTON_LABEL: &str = "Change";
const BUTTON_WIDTH: u16 = 12;
const BUTTON_HEIGHT: u16 = 3;

pub fn run() -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Resize(_, _)) => {
                // The next draw pass picks up the new size.
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    frame.render_widget(header(), chunks[0]);
    draw_body(frame, app, chunks[1]);
    frame.render_widget(footer(chunks[2]), chunks[2]);
}

fn header() -> Paragraph<'static> {
    let title = Line::from(Span::styled(
        " Data Binding Sample",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ));
    Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn draw_body(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    let name_line = Line::from(vec![
        Span::styled("Name: ", Style::default().fg(HEADER_TEXT)),
        Span::styled(
            app.display_name(),
            Style::default().fg(NAME_ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(name_line).alignment(Alignment::Center),
        rows[1],
    );

    let button_area = centered(BUTTON_WIDTH, BUTTON_HEIGHT, rows[3]);
    app.set_button_area(button_area);

    let button = Paragraph::new(Line::from(Span::styled(
        BUTTON_LABEL,
        Style::default().fg(BUTTON_TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(BUTTON_FILL))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(HEADER_TEXT)),
    );
    frame.render_widget(button, button_area);
}

fn footer(area: Rect) -> Paragraph<'static> {
    let hints = " Enter/C: Change name │ Click: Change name │ Q: Quit";
    let version = format!("v{} ", env!("CARGO_PKG_VERSION"));

    // Pad by char count, not byte count (hints contain a Unicode bar).
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Box<dyn FnOnce() + Send + 'static>>>>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(None)),
        }
    }

    fn set_cleanup<F: FnOnce() + Send + 'static>(&self, cleanup: F) {
        if let Ok(mut slot) = self.cleanup.lock() {
            *slot = Some(Box::new(cleanup));
        }
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Ok(mut slot) = cleanup.lock() {
                if let Some(cleanup) = slot.take() {
                    cleanup();
                }
            }
            default_hook(info);
        }));
    }

    fn restore(&self) {
        if let Ok(mut slot) = self.cleanup.lock() {
            if let Some(cleanup) = slot.take() {
                cleanup();
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let guard = TerminalGuard::new();
    guard.set_cleanup(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(DisableMouseCapture);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });
    guard.install_panic_hook();

    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_sits_inside_its_parent() {
        let parent = Rect::new(2, 2, 40, 10);
        let rect = centered(12, 3, parent);
        assert_eq!(rect.width, 12);
        assert_eq!(rect.height, 3);
        assert!(rect.x >= parent.x);
        assert!(rect.y >= parent.y);
        assert!(rect.right() <= parent.right());
        assert!(rect.bottom() <= parent.bottom());
    }

    #[test]
    fn centered_rect_clamps_to_a_small_parent() {
        let parent = Rect::new(0, 0, 8, 2);
        let rect = centered(12, 3, parent);
        assert_eq!(rect.width, 8);
        assert_eq!(rect.height, 2);
    }
}
