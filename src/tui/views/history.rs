//! History view
//!
//! All recorded transactions, newest first

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::transaction::truncate;
use crate::models::TransactionKind;
use crate::tui::app::App;
use crate::tui::layout::MainPanelLayout;

/// Render the History view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MainPanelLayout::new(area);

    let block = Block::default()
        .title(" Transaction History ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let hints = format!(
        "{} transaction(s)  j/k:Move  r:Refresh",
        app.transactions.len()
    );
    frame.render_widget(
        Paragraph::new(hints)
            .block(block)
            .style(Style::default().fg(Color::DarkGray)),
        layout.header,
    );

    render_table(frame, app, layout.content);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.transactions.is_empty() {
        let text = Paragraph::new("No transactions recorded. Add one from the Register view.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(9),  // Type
        Constraint::Length(18), // Category
        Constraint::Length(14), // Amount
        Constraint::Min(10),    // Description
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Description").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let settings = app.settings;
    let rows: Vec<Row> = app
        .transactions
        .iter()
        .map(|txn| {
            let color = match txn.kind {
                TransactionKind::Income => Color::Green,
                TransactionKind::Expense => Color::Red,
            };

            Row::new(vec![
                Cell::from(txn.date.format(&settings.date_format).to_string()),
                Cell::from(txn.kind.to_string()).style(Style::default().fg(color)),
                Cell::from(truncate(&txn.category, 18)),
                Cell::from(txn.amount.format_with_symbol(&settings.currency_symbol))
                    .style(Style::default().fg(color)),
                Cell::from(truncate(&txn.description, 40)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.history_index));

    frame.render_stateful_widget(table, area, &mut state);
}
