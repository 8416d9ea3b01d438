use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

pub const HEADING: &str = "Star Wars Films";

pub struct Header;

pub struct HeaderProps<'a> {
    pub endpoint: &'a str,
}

impl Header {
    pub const HEIGHT: u16 = 2;
}

impl Component<Action> for Header {
    type Props<'a> = HeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        let heading = Line::from(vec![Span::styled(
            HEADING,
            Style::default().fg(Color::Yellow).bold(),
        )])
        .centered();
        frame.render_widget(Paragraph::new(heading), chunks[0]);

        let endpoint = Line::from(vec![Span::styled(
            props.endpoint.to_string(),
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(endpoint), chunks[1]);
    }
}
