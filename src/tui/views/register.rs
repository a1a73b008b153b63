//! Register view
//!
//! The entry form: kind toggle, date, amount, description, category picker
//! and the save button.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::TransactionKind;
use crate::tui::app::{App, RegisterField};
use crate::tui::layout::MainPanelLayout;

/// Style of a kind button given the session's selected kind
pub fn toggle_style(selected: TransactionKind, button: TransactionKind) -> Style {
    let accent = match button {
        TransactionKind::Income => Color::Green,
        TransactionKind::Expense => Color::Red,
    };

    if selected == button {
        Style::default()
            .fg(Color::Black)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent)
    }
}

/// Render the Register view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    render_header(frame, layout.header);
    render_form(frame, app, layout.content);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Register Transaction ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let hints = "Tab:Next field  ←/→:Change  i/e:Kind  t:Today  Ctrl+S:Save";
    let paragraph = Paragraph::new(hints)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Kind
            Constraint::Length(2), // Date
            Constraint::Length(2), // Amount
            Constraint::Length(2), // Description
            Constraint::Length(2), // Category
            Constraint::Length(1), // Save
            Constraint::Min(0),
        ])
        .split(inner);

    let register = &app.register;
    let kind = app.session.entry_kind;

    let kind_line = Line::from(vec![
        field_label("Type", register.focused == RegisterField::Kind),
        Span::styled(" Income ", toggle_style(kind, TransactionKind::Income)),
        Span::raw("  "),
        Span::styled(" Expense ", toggle_style(kind, TransactionKind::Expense)),
    ]);
    frame.render_widget(Paragraph::new(kind_line), rows[0]);

    frame.render_widget(&register.date_input, rows[1]);
    frame.render_widget(&register.amount_input, rows[2]);
    frame.render_widget(&register.description_input, rows[3]);

    let category_focused = register.focused == RegisterField::Category;
    let category_span = match register.selected_category() {
        Some(name) => {
            let style = if category_focused {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(format!("◀ {} ▶", name), style)
        }
        None => Span::styled(
            format!("No {} categories", kind.as_str()),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let category_line = Line::from(vec![
        field_label("Category", category_focused),
        category_span,
        Span::styled(
            format!(
                "  ({}/{})",
                if register.categories.is_empty() { 0 } else { register.category_index + 1 },
                register.categories.len()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(category_line), rows[4]);

    let save_style = if register.focused == RegisterField::Save {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(Paragraph::new(Span::styled("[ Save ]", save_style)), rows[5]);
}

fn field_label(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("{}: ", label), style)
}
