use super::{Frame, Theme};
use crate::metrics;
use crate::state::{HiveFilter, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
};

pub fn apiary_detail(frame: &mut Frame, size: Rect, state: &mut State, theme: &Theme) {
    // Without a selection there is no record to fall back on
    let header = match state.selected_apiary() {
        Ok(apiary) => {
            let mut lines = vec![
                format!(" {}  ({})", apiary.name, apiary.location),
                format!(
                    " Status: {}  Last inspection: {}",
                    apiary.status, apiary.last_inspection
                ),
            ];
            if state.apiary_info_expanded() {
                lines.push(format!(
                    " Hives: {}  Production: {}",
                    apiary.hives_count, apiary.honey_production
                ));
                if !apiary.notes.is_empty() {
                    lines.push(format!(" Notes: {}", apiary.notes));
                }
            }
            lines.join("\n")
        }
        Err(e) => format!(" {}", e),
    };
    let header_height = if state.apiary_info_expanded() { 6 } else { 4 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(size);

    let header_widget = Paragraph::new(header)
        .style(styling::normal_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Apiary")
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(header_widget, rows[0]);

    let counts = metrics::hive_status_counts(state.hives());
    let filter_index = HiveFilter::ALL
        .iter()
        .position(|f| *f == state.hive_filter())
        .unwrap_or(0);
    let titles: Vec<Line> = HiveFilter::ALL
        .iter()
        .map(|f| Line::from(f.label().to_string()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(filter_index)
        .style(styling::muted_text_style(theme))
        .highlight_style(styling::highlight_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "Hives {} ({} active, {} critical, {} dead)",
                    counts.total(),
                    counts.active,
                    counts.critical,
                    counts.dead
                ))
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(tabs, rows[1]);

    let items: Vec<ListItem> = state
        .filtered_hives()
        .iter()
        .map(|hive| {
            ListItem::new(format!(
                " {}  {}  [{}]  inspected {}",
                hive.hive_id, hive.name, hive.status, hive.last_inspection
            ))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme)),
        )
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlight_style(theme));
    frame.render_stateful_widget(list, rows[2], state.hives_list_state());
}
