use crate::clipboard::Clipboard;
use crate::detail::{DetailOutcome, DetailView, DetailViewState};
use crate::notice::{Notice, StatusType};
use color_eyre::Result;
use ratatui::crossterm::event;
use ratatui::crossterm::event::Event;
use ratatui::layout::Alignment;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tracing::debug;

// --- Palette ---
pub(crate) const fn c_bg() -> Color {
    Color::Rgb(18, 18, 23)
}
pub(crate) const fn c_bg_panel() -> Color {
    Color::Rgb(24, 26, 33)
}
pub(crate) const fn c_bg_field() -> Color {
    Color::Rgb(30, 32, 40)
}
pub(crate) const fn c_border() -> Color {
    Color::Rgb(60, 66, 80)
}
pub(crate) const fn c_accent() -> Color {
    Color::Rgb(80, 200, 255)
} // cyan-ish
pub(crate) const fn c_accent2() -> Color {
    Color::Rgb(148, 92, 255)
} // purple
pub(crate) const fn c_ok() -> Color {
    Color::Rgb(120, 220, 120)
}
pub(crate) const fn c_warn() -> Color {
    Color::Rgb(255, 210, 90)
}
pub(crate) const fn c_err() -> Color {
    Color::Rgb(255, 120, 120)
}
pub(crate) const fn c_text() -> Color {
    Color::Rgb(220, 224, 232)
}
pub(crate) const fn c_text_dim() -> Color {
    Color::Rgb(140, 145, 160)
}

/// Drives a detail view until it closes and returns what it produced.
///
/// The caller owns raw mode and the alternate screen.
///
/// # Errors
///
/// Returns an error if the terminal cannot be drawn to or events cannot be read.
pub fn run_detail_view(mut view: Box<dyn DetailView>, clipboard: &mut dyn Clipboard) -> Result<DetailOutcome> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    while !view.is_closed() {
        terminal.draw(|f| {
            let area = f.area();
            view.draw(f, area);
        })?;
        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                view.handle_key(key, clipboard);
            }
        }
    }
    let outcome = view.finish();
    debug!("Detail view closed, confirmed: {}", outcome.confirmed);
    Ok(outcome)
}

pub(crate) fn draw_status_bar(f: &mut Frame, area: Rect, state: DetailViewState, notice: Option<&Notice>) {
    let status_block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(c_border()))
        .style(Style::default().bg(c_bg_panel()));
    f.render_widget(status_block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let (message, message_style) = status_message_and_style(state, notice);
    let status_paragraph = Paragraph::new(Line::from(vec![Span::raw(" "), Span::styled(message, message_style)]))
        .style(Style::default().bg(c_bg_panel()))
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, chunks[0]);

    let hints_paragraph = Paragraph::new(Line::from(key_hints(state)))
        .style(Style::default().bg(c_bg_panel()).fg(c_text_dim()))
        .alignment(Alignment::Right)
        .wrap(Wrap { trim: true });
    f.render_widget(hints_paragraph, chunks[1]);
}

fn status_message_and_style(state: DetailViewState, notice: Option<&Notice>) -> (String, Style) {
    if let Some(notice) = notice {
        let style = match notice.status {
            StatusType::Success => Style::default().fg(c_ok()).add_modifier(Modifier::BOLD),
            StatusType::Error => Style::default().fg(c_err()).add_modifier(Modifier::BOLD),
        };
        (notice.message.clone(), style)
    } else {
        let context_message = match state {
            DetailViewState::View => "Viewing item details",
            DetailViewState::Edit => "Edit the item and press Ctrl+S to save",
            DetailViewState::Add => "Fill in the item details and press Ctrl+S to save",
        };
        (context_message.to_string(), Style::default().fg(c_text_dim()))
    }
}

fn key_hints(state: DetailViewState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    let add_hint = |spans: &mut Vec<Span<'static>>, key: &'static str, action: &'static str, emphasized: bool| {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        let key_style = if emphasized {
            Style::default().fg(c_accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c_text()).add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!("[{key}]"), key_style));
        spans.push(Span::styled(format!(" {action}"), Style::default().fg(c_text_dim())));
    };

    add_hint(&mut spans, "Tab", "Next Field", false);
    if state.is_editable() {
        add_hint(&mut spans, "←→", "Choose", false);
        add_hint(&mut spans, "Ctrl+S", "Save", true);
        add_hint(&mut spans, "Esc", "Cancel", false);
    } else {
        add_hint(&mut spans, "Enter", "Show/Copy", true);
        add_hint(&mut spans, "Esc", "Close", false);
    }

    spans.push(Span::raw(" "));
    spans
}

pub(crate) fn field_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { c_accent() } else { c_border() };
    let title_color = if focused { c_accent() } else { c_text_dim() };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(c_bg_field()))
        .title(Span::styled(format!(" {title} "), Style::default().fg(title_color)))
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let h = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(v[1]);
    h[1]
}

pub(crate) const fn pad(r: Rect, x: u16, y: u16) -> Rect {
    Rect {
        x: r.x.saturating_add(x),
        y: r.y.saturating_add(y),
        width: r.width.saturating_sub(x.saturating_mul(2)),
        height: r.height.saturating_sub(y.saturating_mul(2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_saturates() {
        let r = pad(Rect::new(0, 0, 3, 3), 2, 2);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
        assert_eq!(r.x, 2);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 40, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert!(inner.x >= 25 && inner.y >= 15);
    }

    #[test]
    fn test_notice_overrides_context_message() {
        let (message, _) = status_message_and_style(DetailViewState::Edit, None);
        assert!(message.contains("Ctrl+S"));

        let notice = Notice::success("Card number copied to clipboard.");
        let (message, style) = status_message_and_style(DetailViewState::View, Some(&notice));
        assert_eq!(message, "Card number copied to clipboard.");
        assert_eq!(style.fg, Some(c_ok()));

        let notice = Notice::error("Could not copy card number: no display");
        let (_, style) = status_message_and_style(DetailViewState::View, Some(&notice));
        assert_eq!(style.fg, Some(c_err()));
    }

    #[test]
    fn test_view_hints_have_no_save() {
        let text: String = key_hints(DetailViewState::View).iter().map(|s| s.content.to_string()).collect();
        assert!(!text.contains("Save"));
        let text: String = key_hints(DetailViewState::Add).iter().map(|s| s.content.to_string()).collect();
        assert!(text.contains("Save"));
    }
}
