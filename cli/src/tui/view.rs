use super::model::TableModel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Renders the table browser
pub struct TableView;

impl TableView {
    /// Render the whole screen based on the current model state
    pub fn render(model: &TableModel, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Table
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        Self::render_table(model, frame, chunks[0]);
        Self::render_status_bar(model, frame, chunks[1]);
    }

    fn render_table(model: &TableModel, frame: &mut Frame, area: Rect) {
        let (border_color, highlight) = if model.focused {
            (
                Color::Cyan,
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            )
        } else {
            (Color::DarkGray, Style::default())
        };

        let header = Row::new(["Repository", "Scan"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows = model.rows.iter().map(|row| {
            let style = if row.valid {
                Style::default()
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                Cell::from(row.repository.as_str()),
                Cell::from(row.scan.as_str()),
            ])
            .style(style)
        });

        let table = Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("Repositories ({})", model.rows.len())),
            )
            .row_highlight_style(highlight);

        let selected = (!model.rows.is_empty()).then_some(model.cursor);
        let mut state = TableState::default().with_selected(selected);
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_status_bar(model: &TableModel, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::styled("↑/↓", key),
            Span::raw(" move  "),
            Span::styled("enter", key),
            Span::raw(" select  "),
            Span::styled("esc", key),
            Span::raw(if model.focused { " blur  " } else { " focus  " }),
            Span::styled("q", key),
            Span::raw(" quit"),
        ];
        if let Some(repository) = model.last_selected() {
            spans.push(Span::raw("  |  Selected: "));
            spans.push(Span::styled(repository, Style::default().fg(Color::Green)));
        }

        let status = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(status, area);
    }
}
