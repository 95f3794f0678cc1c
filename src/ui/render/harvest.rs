use super::{Frame, Theme};
use crate::metrics;
use crate::models::mock;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
};

pub fn harvest(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(size);

    let year_index = mock::HARVEST_YEARS
        .iter()
        .position(|y| *y == state.selected_year())
        .unwrap_or(0);
    let titles: Vec<Line> = mock::HARVEST_YEARS
        .iter()
        .map(|y| Line::from(y.to_string()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(year_index)
        .style(styling::muted_text_style(theme))
        .highlight_style(styling::highlight_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Season")
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(tabs, rows[0]);

    let records = state.current_year_records();
    let table_rows: Vec<Row> = records
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.harvest_date.clone()),
                Cell::from(format!("{} ({})", record.hive_name, record.hive_id)),
                Cell::from(format!("{:.1}", record.honey)),
                Cell::from(format!("{:.1}", record.pollen)),
                Cell::from(format!("{:.1}", record.propolis)),
            ])
        })
        .collect();
    let table = Table::new(
        table_rows,
        [
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Date", "Hive", "Honey", "Pollen", "Propolis"])
            .style(styling::active_block_title_style()),
    )
    .style(styling::normal_text_style(theme))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Harvests")
            .border_style(styling::active_block_border_style(theme)),
    );
    frame.render_widget(table, rows[1]);

    // Season totals, overall and per distinct hive
    let mut summary = format!(
        " Total: {:.1} kg honey  Average per hive: {:.1} kg",
        metrics::total_production(records),
        metrics::average_production(records),
    );
    let per_hive: Vec<String> = metrics::distinct_hives(records)
        .iter()
        .map(|(hive_id, name)| {
            format!("{}: {:.1}", name, metrics::hive_total_honey(records, hive_id))
        })
        .collect();
    if !per_hive.is_empty() {
        summary.push_str(&format!("\n {}", per_hive.join("  ")));
        let monthly: Vec<String> = mock::HARVEST_MONTHS
            .iter()
            .map(|month| {
                let total: f64 = metrics::distinct_hives(records)
                    .iter()
                    .map(|(hive_id, _)| metrics::monthly_honey(records, hive_id, month))
                    .sum();
                format!("{}: {:.1}", month, total)
            })
            .collect();
        summary.push_str(&format!("\n {}", monthly.join("  ")));
    }
    let summary_widget = Paragraph::new(summary)
        .style(styling::normal_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Summary")
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(summary_widget, rows[2]);
}
