use super::{Frame, Theme};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
};

pub fn apiaries(frame: &mut Frame, size: Rect, state: &mut State, theme: &Theme) {
    let items: Vec<ListItem> = state
        .apiaries()
        .iter()
        .map(|apiary| {
            ListItem::new(format!(
                " {}  ({})  {} hives  [{}]",
                apiary.name, apiary.location, apiary.hives_count, apiary.status
            ))
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Apiaries")
                .border_style(styling::active_block_border_style(theme))
                .title_style(styling::active_block_title_style()),
        )
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlight_style(theme));
    frame.render_stateful_widget(list, size, state.apiaries_list_state());
}
