//! The whole page: header, film list, refetch control and help bar
//!
//! Keys and scrolling are handled here; mouse clicks go to the refetch button,
//! which knows where it was drawn.

use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
    Frame,
};
use films_core::EventKind;

use super::{
    film_list::max_offset, Component, FilmList, FilmListProps, Header, HeaderProps, HelpBar, HelpBarProps,
    RefetchButton, RefetchButtonProps, SPINNERS,
};
use crate::action::Action;
use crate::machine::StateValue;
use crate::state::AppState;

pub struct FilmsPageProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct FilmsPage {
    button: RefetchButton,
    /// Height of the film list at the last render
    list_rows: u16,
}

impl FilmsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(&self) -> &RefetchButton {
        &self.button
    }

    /// Scroll action for moving the list by `delta` rows, if it would move.
    fn scroll(&self, state: &AppState, delta: isize) -> Vec<Action> {
        let Some(films) = state.machine.films() else {
            return vec![];
        };
        let max = max_offset(films.len(), self.list_rows);
        let current = state.list_offset.min(max);
        let target = current.saturating_add_signed(delta).min(max);
        if target == current {
            vec![]
        } else {
            vec![Action::UiListScroll(target)]
        }
    }
}

impl Component<Action> for FilmsPage {
    type Props<'a> = FilmsPageProps<'a>;

    fn handle_event<'p>(&mut self, event: &EventKind, props: FilmsPageProps<'p>) -> Vec<Action>
    where
        'p: 'p,
    {
        match event {
            EventKind::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('r') | KeyCode::Enter | KeyCode::F(5) => vec![Action::FilmsRefetch],
                KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
                KeyCode::Up | KeyCode::Char('k') => self.scroll(props.state, -1),
                KeyCode::Down | KeyCode::Char('j') => self.scroll(props.state, 1),
                _ => vec![],
            },
            EventKind::Scroll { delta, .. } => self.scroll(props.state, *delta),
            EventKind::Mouse(_) => self.button.handle_event(
                event,
                RefetchButtonProps {
                    is_loading: is_loading(props.state),
                },
            ),
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: FilmsPageProps<'_>) {
        let state = props.state;
        let loading = is_loading(state);

        let spinner = if loading {
            format!(" {} ", SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()])
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" SWAPI{}", spinner))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let [header_area, _, list_area, button_area, help_area] = Layout::vertical([
            Constraint::Length(Header::HEIGHT),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(RefetchButton::HEIGHT),
            Constraint::Length(1), // Help bar
        ])
        .areas(inner);

        Header.render(
            frame,
            header_area,
            HeaderProps {
                endpoint: &state.endpoint,
            },
        );

        self.list_rows = list_area.height;
        FilmList.render(
            frame,
            list_area,
            FilmListProps {
                machine: &state.machine,
                tick_count: state.tick_count,
                offset: state.list_offset,
            },
        );

        self.button.render(
            frame,
            button_area,
            RefetchButtonProps {
                is_loading: loading,
            },
        );

        HelpBar.render(frame, help_area, HelpBarProps);
    }
}

fn is_loading(state: &AppState) -> bool {
    state.machine.matches(StateValue::Loading)
}
