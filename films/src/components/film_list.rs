//! Body of the page: one of loading, error, or the film rows
//!
//! Rows that do not fit are reached by scrolling; a scrollbar on the right
//! edge shows up when the list is longer than the area.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::machine::{FilmsMachine, StateValue};
use crate::state::{AllFilms, Film};

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct FilmList;

pub struct FilmListProps<'a> {
    pub machine: &'a FilmsMachine,
    pub tick_count: u32,
    /// First row to show, clamped so the last page stays full
    pub offset: usize,
}

/// Largest useful offset for `len` rows in an area `rows` high.
pub fn max_offset(len: usize, rows: u16) -> usize {
    len.saturating_sub(rows as usize)
}

impl Component<Action> for FilmList {
    type Props<'a> = FilmListProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let text = match props.machine.value() {
            StateValue::Loading => loading_text(props.tick_count),
            StateValue::Error => error_text(props.machine.error().unwrap_or_default()),
            StateValue::Success => match props.machine.films() {
                Some(films) => return render_films(frame, area, films, props.offset),
                None => Text::default(),
            },
        };
        frame.render_widget(Paragraph::new(text), area);
    }
}

fn loading_text(tick_count: u32) -> Text<'static> {
    let spinner = SPINNERS[(tick_count as usize / 2) % SPINNERS.len()];
    Text::from(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Cyan)),
            Span::styled(" Loading...", Style::default().fg(Color::Gray)),
        ])
        .centered(),
    ])
}

fn error_text(message: &str) -> Text<'static> {
    Text::from(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "Error :(",
            Style::default().fg(Color::Red).bold(),
        )])
        .centered(),
        Line::from(vec![Span::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        )])
        .centered(),
    ])
}

fn render_films(frame: &mut Frame, area: Rect, films: &AllFilms, offset: usize) {
    if films.is_empty() {
        let empty =
            Line::from(Span::styled("No films", Style::default().fg(Color::DarkGray))).centered();
        frame.render_widget(Paragraph::new(empty), area);
        return;
    }

    let max = max_offset(films.len(), area.height);
    let offset = offset.min(max);
    let lines: Vec<Line> = films
        .iter()
        .skip(offset)
        .take(area.height as usize)
        .map(film_line)
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    if max > 0 {
        let mut scrollbar = ScrollbarState::new(max + 1).position(offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area,
            &mut scrollbar,
        );
    }
}

fn film_line(film: &Film) -> Line<'static> {
    Line::from(vec![
        Span::styled(" • ", Style::default().fg(Color::DarkGray)),
        Span::styled(film.title.clone(), Style::default().fg(Color::White).bold()),
        Span::styled(
            format!("  Episode {} · {}", film.episode_id, film.director),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
