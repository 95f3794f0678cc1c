use super::{Frame, Theme};
use crate::state::{DrawerItem, Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem, ListState},
};

pub fn drawer(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let border_style = if state.focus() == Focus::Drawer {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let items: Vec<ListItem> = DrawerItem::ALL
        .iter()
        .map(|item| ListItem::new(format!(" {}", item.title())))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Menu")
                .border_style(border_style)
                .title_style(styling::active_block_title_style()),
        )
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlight_style(theme));
    let mut list_state = ListState::default();
    list_state.select(Some(state.drawer_index()));
    frame.render_stateful_widget(list, size, &mut list_state);
}
