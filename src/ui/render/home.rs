use super::{Frame, Theme};
use crate::metrics;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

fn summary_box(frame: &mut Frame, area: Rect, title: &str, value: String, theme: &Theme) {
    let widget = Paragraph::new(value)
        .alignment(Alignment::Center)
        .style(styling::banner_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(styling::normal_block_border_style(theme)),
        );
    frame.render_widget(widget, area);
}

pub fn home(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(size);
    let summaries = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    let apiaries = state.apiaries();
    summary_box(
        frame,
        summaries[0],
        "Apiaries",
        apiaries.len().to_string(),
        theme,
    );
    summary_box(
        frame,
        summaries[1],
        "Total Hives",
        metrics::total_hives(apiaries).to_string(),
        theme,
    );
    summary_box(
        frame,
        summaries[2],
        "Honey Production",
        format!("{} kg", metrics::total_honey(apiaries)),
        theme,
    );

    let items: Vec<ListItem> = state
        .activities()
        .iter()
        .map(|activity| {
            ListItem::new(format!(
                " {}  {}  {} / {}  [{}]",
                activity.date, activity.kind, activity.apiary, activity.hive, activity.status
            ))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Recent Activity")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style(styling::normal_text_style(theme));
    frame.render_widget(list, rows[1]);
}
