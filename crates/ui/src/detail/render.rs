use super::{ItemDetailView, ItemFields};
use crate::controls::{ControlId, ControlRef};
use crate::secure_field::SecureField;
use crate::ui::{
    c_accent, c_accent2, c_bg, c_bg_panel, c_border, c_err, c_text, c_text_dim, c_warn, centered_rect,
    draw_status_bar, field_block, pad,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const LABEL_WIDTH: usize = 24;

impl<F: ItemFields> ItemDetailView<F> {
    pub fn draw(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Block::default().style(Style::default().bg(c_bg())), area);

        let root = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(2), // Status bar
            ])
            .split(area);

        self.draw_header(f, root[0]);
        self.draw_body(f, root[1]);
        draw_status_bar(f, root[2], self.state, self.notice.as_ref());

        if let Some(dialog) = &self.dialog {
            let dialog_area = centered_rect(50, 25, area);
            f.render_widget(Clear, dialog_area);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(c_err()))
                .style(Style::default().bg(c_bg_panel()).fg(c_text()))
                .title(Span::styled(
                    format!(" {} ", dialog.title),
                    Style::default().fg(c_err()).add_modifier(Modifier::BOLD),
                ));
            let body = Paragraph::new(vec![
                Line::from(dialog.message.as_str()),
                Line::from(""),
                Line::from(vec![
                    Span::styled("[Enter]", Style::default().fg(c_accent()).add_modifier(Modifier::BOLD)),
                    Span::styled(" OK", Style::default().fg(c_text_dim())),
                ]),
            ])
            .block(block)
            .wrap(Wrap { trim: true });
            f.render_widget(body, dialog_area);
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled("  ◈ warden ", Style::default().fg(c_accent()).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(
                format!("{} {}", self.state.as_str(), F::ITEM_TYPE.display_name()),
                Style::default().fg(c_text_dim()),
            ),
        ]);
        let bar = Paragraph::new(title).style(Style::default().bg(c_bg_panel()).fg(c_text()));
        f.render_widget(bar, area);
    }

    fn draw_body(&self, f: &mut Frame, area: Rect) {
        let panel = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(c_border()))
            .style(Style::default().bg(c_bg_panel()).fg(c_text()))
            .title(Span::styled(
                format!(" {} Item ", self.state.as_str()),
                Style::default().fg(c_accent2()).add_modifier(Modifier::BOLD),
            ));
        f.render_widget(panel, area);

        let inner = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(pad(area, 2, 1));

        let name = Paragraph::new(field_box(self.name.text(), self.focus == ControlId::ItemName))
            .block(field_block(self.name.label, self.focus == ControlId::ItemName))
            .style(Style::default().fg(c_text()));
        f.render_widget(name, inner[0]);

        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner[1]);

        let folder = Paragraph::new(choice(self.folder.display(), self.focus == ControlId::Folder))
            .block(field_block("Folder", self.focus == ControlId::Folder))
            .style(Style::default().fg(c_text()));
        f.render_widget(folder, row[0]);

        let (star, star_style) = if self.favorite {
            ("★ Favorite", Style::default().fg(c_warn()).add_modifier(Modifier::BOLD))
        } else {
            ("☆ Favorite", Style::default().fg(c_text_dim()))
        };
        let favorite = Paragraph::new(Span::styled(star, star_style))
            .block(field_block("Favorite", self.focus == ControlId::Favorite));
        f.render_widget(favorite, row[1]);

        let mut notes = self.notes.clone();
        notes.set_block(field_block("Notes", self.focus == ControlId::Notes));
        if self.focus != ControlId::Notes || !self.state.is_editable() {
            notes.set_cursor_style(Style::default());
        }
        f.render_widget(&notes, inner[2]);

        self.draw_fields(f, inner[3]);

        let stamps = Paragraph::new(Line::from(vec![
            Span::styled("Created ", Style::default().fg(c_text_dim())),
            Span::styled(timestamp(self.item.creation_date), Style::default().fg(c_text())),
            Span::styled("   Updated ", Style::default().fg(c_text_dim())),
            Span::styled(timestamp(self.item.revision_date), Style::default().fg(c_text())),
        ]));
        f.render_widget(stamps, inner[4]);
    }

    fn draw_fields(&self, f: &mut Frame, area: Rect) {
        let controls = self.fields.controls();
        if controls.is_empty() {
            return;
        }

        let mut lines = Vec::with_capacity(controls.len());
        let mut focused_line = None;
        for control in &controls {
            let focused = control.tab_stops().contains(&self.focus);
            if focused {
                focused_line = Some(lines.len());
            }
            lines.push(self.field_line(control, focused));
        }

        // Keep the focused row inside the box.
        let visible = usize::from(area.height.saturating_sub(2)).max(1);
        let offset = focused_line.map_or(0, |line| line.saturating_sub(visible - 1));
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);

        let title = format!("{} details", F::ITEM_TYPE.display_name());
        let body = Paragraph::new(lines)
            .block(field_block(&title, focused_line.is_some()))
            .scroll((offset, 0));
        f.render_widget(body, area);
    }

    fn field_line(&self, control: &ControlRef<'_>, focused: bool) -> Line<'static> {
        let label_style = if focused {
            Style::default().fg(c_accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c_text_dim())
        };
        let mut spans = vec![Span::styled(format!(" {:<width$}", control.label(), width = LABEL_WIDTH), label_style)];

        match control {
            ControlRef::Text(text) => {
                spans.push(Span::styled(field_box(text.text(), focused), value_style(focused)));
            }
            ControlRef::Select(select) => {
                let label = select.selected_item().map_or("—", |item| item.label.as_str());
                spans.push(Span::styled(choice(label, focused), value_style(focused)));
            }
            ControlRef::Secure(secure) => {
                let field_focused = self.focus == secure.field_id();
                spans.push(Span::styled(
                    field_box(&secure.display(self.mask_char), field_focused),
                    value_style(field_focused),
                ));
                spans.extend(self.secure_buttons(secure));
            }
        }
        Line::from(spans)
    }

    fn secure_buttons(&self, secure: &SecureField) -> [Span<'static>; 4] {
        let button = |caption: &str, id: ControlId| {
            let style = if self.focus == id {
                Style::default().fg(c_bg()).bg(c_accent()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c_accent())
            };
            Span::styled(format!("[{caption}]"), style)
        };
        [
            Span::raw("  "),
            button(secure.disclosure_label(), secure.reveal_id()),
            Span::raw(" "),
            button("Copy", secure.copy_id()),
        ]
    }
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(c_text()).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c_text())
    }
}

fn field_box(content: &str, focused: bool) -> String {
    if focused {
        format!("[{content}]")
    } else {
        format!(" {content} ")
    }
}

fn choice(content: &str, focused: bool) -> String {
    if focused {
        format!("‹ {content} ›")
    } else {
        format!("  {content}  ")
    }
}

fn timestamp(at: Option<OffsetDateTime>) -> String {
    at.map_or_else(
        || "Not saved yet".to_string(),
        |at| at.format(&Rfc3339).unwrap_or_else(|_| "Unknown".to_string()),
    )
}
