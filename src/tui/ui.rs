use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame, Terminal,
};
use std::io::{stdout, Stdout};

use crate::chart::{ChartSeries, Tooltip};
use crate::currency::{format_number, LocaleConfig};
use crate::errors::Result;
use crate::session::FormMode;

use super::{App, Field};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

pub(crate) struct Areas {
    pub title: Rect,
    pub note: Rect,
    pub income: Rect,
    pub expense: Rect,
    pub chart: Rect,
    pub panel: Rect,
    pub footer: Rect,
}

pub(crate) fn areas(frame: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(frame);
    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[1]);
    Areas {
        title: rows[0],
        note: inputs[0],
        income: inputs[1],
        expense: inputs[2],
        chart: rows[2],
        panel: rows[3],
        footer: rows[4],
    }
}

/// Approximate plotting region inside the chart block: borders, the y-axis
/// label gutter, and the x-axis label row are not part of the line area.
pub(crate) fn plot_area(chart: Rect, y_label_width: u16) -> Rect {
    let inner = Rect {
        x: chart.x.saturating_add(1),
        y: chart.y.saturating_add(1),
        width: chart.width.saturating_sub(2),
        height: chart.height.saturating_sub(2),
    };
    Rect {
        x: inner.x.saturating_add(y_label_width + 1),
        y: inner.y,
        width: inner.width.saturating_sub(y_label_width + 1),
        height: inner.height.saturating_sub(2),
    }
}

/// Maps a clicked column back to the nearest plotted position.
pub(crate) fn nearest_position(column: u16, plot: Rect, len: usize) -> Option<usize> {
    if len == 0 || plot.width < 2 {
        return None;
    }
    if column < plot.x || column >= plot.x + plot.width {
        return None;
    }
    if len == 1 {
        return Some(0);
    }
    let offset = (column - plot.x) as f64;
    let step = (plot.width - 1) as f64 / (len - 1) as f64;
    let index = (offset / step).round() as usize;
    Some(index.min(len - 1))
}

pub(crate) fn y_axis_labels(y_max: f64, locale: &LocaleConfig) -> Vec<String> {
    [0.0, y_max / 2.0, y_max]
        .iter()
        .map(|value| format_number(locale, *value, 0))
        .collect()
}

pub(crate) fn y_label_width(labels: &[String]) -> u16 {
    labels.iter().map(|l| l.len() as u16).max().unwrap_or(1)
}

pub fn render(frame: &mut Frame, app: &App) {
    let areas = areas(frame.size());
    render_title(frame, areas.title, app);
    render_inputs(frame, &areas, app);
    render_chart(frame, areas.chart, app);
    render_panel(frame, areas.panel, app);
    render_footer(frame, areas.footer, app);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Span::styled(
        "Pengelolaan Uang",
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, area);
}

fn render_inputs(frame: &mut Frame, areas: &Areas, app: &App) {
    render_field(
        frame,
        areas.note,
        "Catatan",
        app.manager.journal().note(),
        app.focus == Field::Note,
        app,
    );
    render_field(
        frame,
        areas.income,
        "Pendapatan",
        app.form.income(),
        app.focus == Field::Income,
        app,
    );
    render_field(
        frame,
        areas.expense,
        "Pengeluaran",
        app.form.expense(),
        app.focus == Field::Expense,
        app,
    );
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool, app: &App) {
    let border = if focused {
        Style::default().fg(app.theme.accent)
    } else {
        Style::default().fg(app.theme.dim)
    };
    let field = Paragraph::new(value)
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(label),
        );
    frame.render_widget(field, area);
}

fn render_chart(frame: &mut Frame, area: Rect, app: &App) {
    let series = ChartSeries::from_entries(app.manager.journal().entries());
    let y_labels = y_axis_labels(series.y_max, &app.locale);

    let selected_points: Vec<(f64, f64)> = app
        .form
        .selection()
        .and_then(|position| app.manager.journal().get(position).map(|e| (position, e)))
        .map(|(position, entry)| {
            vec![
                (position as f64, entry.income as f64),
                (position as f64, entry.expense as f64),
            ]
        })
        .unwrap_or_default();

    let mut datasets = vec![
        Dataset::default()
            .name("Pendapatan")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.income))
            .data(&series.income),
        Dataset::default()
            .name("Pengeluaran")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.expense))
            .data(&series.expense),
    ];
    if !selected_points.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(app.theme.accent))
                .data(&selected_points),
        );
    }

    let x_max = series.len().saturating_sub(1).max(1) as f64;
    let x_labels: Vec<Span> = match (series.x_labels.first(), series.x_labels.last()) {
        (Some(first), Some(last)) if series.len() > 1 => vec![
            Span::styled(first.clone(), Style::default().fg(app.theme.dim)),
            Span::styled(last.clone(), Style::default().fg(app.theme.dim)),
        ],
        (Some(only), _) => vec![Span::styled(only.clone(), Style::default().fg(app.theme.dim))],
        _ => Vec::new(),
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.dim)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.dim))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.dim))
                .bounds([0.0, series.y_max])
                .labels(
                    y_labels
                        .iter()
                        .map(|label| {
                            Span::styled(label.clone(), Style::default().fg(app.theme.dim))
                        })
                        .collect(),
                ),
        );
    frame.render_widget(chart, area);
}

fn render_panel(frame: &mut Frame, area: Rect, app: &App) {
    let position = app.hovered.or(app.form.selection());
    let entry = position.and_then(|p| app.manager.journal().get(p));

    let lines: Vec<Line> = match entry {
        Some(entry) => {
            let tooltip = Tooltip::for_entry(entry, &app.code, &app.locale);
            vec![
                Line::from(Span::styled(
                    tooltip.note,
                    Style::default()
                        .fg(app.theme.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(tooltip.day, Style::default().fg(app.theme.text))),
                Line::from(Span::styled(
                    format!("Tanggal: {}", tooltip.date),
                    Style::default().fg(app.theme.dim),
                )),
                Line::from(Span::styled(
                    format!("Waktu: {}", tooltip.time),
                    Style::default().fg(app.theme.dim),
                )),
                Line::from(Span::styled(
                    format!("Pendapatan: {}", tooltip.income_display),
                    Style::default().fg(app.theme.income),
                )),
                Line::from(Span::styled(
                    format!("Pengeluaran: {}", tooltip.expense_display),
                    Style::default().fg(app.theme.expense),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Klik titik pada grafik untuk memilih catatan.",
            Style::default().fg(app.theme.dim),
        ))],
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.dim)),
    );
    frame.render_widget(panel, area);
}

/// Key hints, with the action label and the delete state following the
/// selection: add while idle, edit while a point is selected.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let action = match app.form.mode() {
        FormMode::Idle => "Tambah",
        FormMode::Editing(_) => "Edit",
    };
    let delete_style = match app.form.mode() {
        FormMode::Idle => Style::default().fg(app.theme.dim),
        FormMode::Editing(_) => Style::default().fg(app.theme.expense),
    };
    let line = Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(app.theme.accent)),
        Span::styled(action, Style::default().fg(app.theme.text)),
        Span::styled("   [Del] ", Style::default().fg(app.theme.accent)),
        Span::styled("Hapus", delete_style),
        Span::styled(
            "   [Tab] ganti kolom   [\u{2190}/\u{2192}] pilih titik   [Esc] batal   [Ctrl-C] keluar",
            Style::default().fg(app.theme.dim),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_position_maps_edges_and_midpoints() {
        let plot = Rect {
            x: 10,
            y: 2,
            width: 21,
            height: 10,
        };
        assert_eq!(nearest_position(10, plot, 3), Some(0));
        assert_eq!(nearest_position(20, plot, 3), Some(1));
        assert_eq!(nearest_position(30, plot, 3), Some(2));
        // Clicks between points snap to the nearest one.
        assert_eq!(nearest_position(13, plot, 3), Some(0));
        assert_eq!(nearest_position(18, plot, 3), Some(1));
    }

    #[test]
    fn nearest_position_rejects_outside_columns() {
        let plot = Rect {
            x: 10,
            y: 2,
            width: 20,
            height: 10,
        };
        assert_eq!(nearest_position(9, plot, 3), None);
        assert_eq!(nearest_position(30, plot, 3), None);
        assert_eq!(nearest_position(15, plot, 0), None);
    }

    #[test]
    fn single_point_takes_whole_plot() {
        let plot = Rect {
            x: 5,
            y: 0,
            width: 10,
            height: 5,
        };
        assert_eq!(nearest_position(7, plot, 1), Some(0));
    }

    #[test]
    fn layout_splits_are_stable() {
        let frame = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 30,
        };
        let areas = areas(frame);
        assert_eq!(areas.title.height, 1);
        assert_eq!(areas.note.width + areas.income.width + areas.expense.width, 100);
        assert_eq!(areas.panel.height, 8);
        assert_eq!(areas.footer.height, 1);
        assert!(areas.chart.height >= 8);
    }
}
