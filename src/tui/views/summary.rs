//! Monthly Summary view
//!
//! Year and month pickers, the month's totals as a bar chart, and the
//! category breakdown of the kind selected with "show details".

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Money, TransactionKind};
use crate::reports::{MonthlyReport, ReportDetail};
use crate::tui::app::App;
use crate::tui::layout::{MainPanelLayout, SummaryLayout};

/// Render the Monthly Summary view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = MainPanelLayout::new(area);
    let report = app.monthly_report();

    render_header(frame, app, report.as_ref(), layout.header);

    let Some(report) = report else {
        render_message(
            frame,
            layout.content,
            "No transactions recorded yet. Add one from the Register view.",
        );
        return;
    };

    if report.is_empty() {
        render_message(
            frame,
            layout.content,
            &format!("No transactions for {}.", report.period_label()),
        );
        return;
    }

    let summary_layout = SummaryLayout::new(layout.content);
    let currency = app.settings.currency_symbol.as_str();
    render_metrics(frame, &report, currency, summary_layout.metrics);
    render_totals_chart(frame, &report, currency, summary_layout.totals_chart);
    render_breakdown(frame, report.detail.as_ref(), currency, summary_layout.breakdown);
}

fn render_header(frame: &mut Frame, app: &App, report: Option<&MonthlyReport>, area: Rect) {
    let title = match report {
        Some(report) => format!(" Monthly Summary: {} ", report.period_label()),
        None => " Monthly Summary ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let year = app
        .summary
        .selected_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());
    let line = Line::from(vec![
        Span::styled("Year ", Style::default().fg(Color::White)),
        Span::styled(format!("◀ {} ▶", year), Style::default().fg(Color::Yellow)),
        Span::styled("  Month ", Style::default().fg(Color::White)),
        Span::styled(
            format!("◀ {:02} ▶", app.summary.month),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            "   ↑/↓:Year  ←/→:Month  i:Income details  e:Expense details",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let text = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(Color::Blue));
    frame.render_widget(text, area);
}

fn render_metrics(frame: &mut Frame, report: &MonthlyReport, currency: &str, area: Rect) {
    let summary = &report.summary;
    let net_color = if summary.net_savings.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let line = Line::from(vec![
        Span::styled("Income: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.total_income.format_with_symbol(currency),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Expenses: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.total_expense.format_with_symbol(currency),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Net savings: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.net_savings.format_with_symbol(currency),
            Style::default().fg(net_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({} transactions)", report.transaction_count),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn kind_color(kind: TransactionKind) -> Color {
    match kind {
        TransactionKind::Income => Color::Green,
        TransactionKind::Expense => Color::Red,
    }
}

/// Chart height for an amount; bars only grow upward
fn bar_value(amount: Money) -> u64 {
    amount.cents().max(0) as u64
}

fn render_totals_chart(frame: &mut Frame, report: &MonthlyReport, currency: &str, area: Rect) {
    let bars: Vec<Bar> = TransactionKind::ALL
        .iter()
        .map(|&kind| {
            let total = report.summary.total_for(kind);
            Bar::default()
                .value(bar_value(total))
                .label(Line::from(kind.plural()))
                .text_value(total.format_with_symbol(currency))
                .style(Style::default().fg(kind_color(kind)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Income vs. Expenses ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(area.width.saturating_sub(6) / 2)
        .bar_gap(2);

    frame.render_widget(chart, area);
}

fn render_breakdown(frame: &mut Frame, detail: Option<&ReportDetail>, currency: &str, area: Rect) {
    let Some(detail) = detail else {
        render_message(frame, area, "Press i or e to show details by category.");
        return;
    };

    let block = Block::default()
        .title(format!(" {} by category ", detail.kind.plural()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if detail.categories.is_empty() {
        let text = Paragraph::new(format!(
            "No {} recorded this month.",
            detail.kind.plural().to_lowercase()
        ))
        .block(block)
        .style(Style::default().fg(Color::Blue));
        frame.render_widget(text, area);
        return;
    }

    let bars: Vec<Bar> = detail
        .categories
        .iter()
        .map(|entry| {
            Bar::default()
                .value(bar_value(entry.total))
                .label(Line::from(entry.category.as_str()))
                .text_value(entry.total.format_with_symbol(currency))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(1)
        .bar_style(Style::default().fg(kind_color(detail.kind)))
        .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    frame.render_widget(chart, area);
}
