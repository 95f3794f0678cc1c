use super::{Frame, Theme};
use crate::metrics;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn hive_detail(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(size);

    let info = match state.selected_hive() {
        Ok(hive) => {
            let year_total =
                metrics::hive_total_honey(state.current_year_records(), &hive.hive_id);
            [
                format!(" {}  {}  [{}]", hive.hive_id, hive.name, hive.status),
                format!(
                    " Incorporated: {}  Last inspection: {}",
                    hive.incorporation_date, hive.last_inspection
                ),
                format!(
                    " Queen age: {}  Frames: {} ({} brood, {} honey)",
                    hive.queen_age, hive.frames_count, hive.brood_frames, hive.honey_frames
                ),
                format!(
                    " Production: {}  Honey this year: {:.1} kg",
                    hive.honey_production, year_total
                ),
                format!(" Notes: {}", hive.notes),
            ]
            .join("\n")
        }
        Err(e) => format!(" {}", e),
    };
    let info_widget = Paragraph::new(info)
        .style(styling::normal_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Hive")
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(info_widget, rows[0]);

    let items: Vec<ListItem> = state
        .inspections_for_selected_hive()
        .iter()
        .rev()
        .map(|record| {
            let mut line = format!(
                " {}  queen: {}  brood: {}  honey: {}  health: {}",
                record.date,
                record.queen_status,
                record.brood_status,
                record.honey_status,
                record.health_status
            );
            if !record.observations.is_empty() {
                line.push_str(&format!("  ({})", record.observations));
            }
            ListItem::new(line)
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Inspection Log")
                .border_style(styling::active_block_border_style(theme)),
        )
        .style(styling::normal_text_style(theme));
    frame.render_widget(list, rows[1]);
}
