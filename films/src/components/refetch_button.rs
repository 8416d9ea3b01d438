//! The refetch control
//!
//! Remembers where it was last drawn so mouse clicks can be hit-tested.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;
use films_core::EventKind;

pub const REFETCH_LABEL: &str = "[ Refetch ]";
pub const CACHE_HINT: &str = "(might be super fast because of cache)";

#[derive(Debug, Default)]
pub struct RefetchButton {
    area: Option<Rect>,
}

pub struct RefetchButtonProps {
    /// Drawn dimmed while a fetch is running (presses are ignored then)
    pub is_loading: bool,
}

impl RefetchButton {
    pub const HEIGHT: u16 = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Where the label was drawn by the last `render`.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }
}

impl Component<Action> for RefetchButton {
    type Props<'a> = RefetchButtonProps;

    fn handle_event<'p>(&mut self, event: &EventKind, _props: RefetchButtonProps) -> Vec<Action>
    where
        'p: 'p,
    {
        match self.area {
            Some(area) if event.is_click_in(area) => vec![Action::FilmsRefetch],
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: RefetchButtonProps) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

        let label_width = (REFETCH_LABEL.len() as u16).min(chunks[0].width);
        let [label_area] = Layout::horizontal([Constraint::Length(label_width)])
            .flex(Flex::Center)
            .areas(chunks[0]);
        self.area = Some(label_area);

        let style = if props.is_loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan).bold()
        };
        frame.render_widget(Paragraph::new(Span::styled(REFETCH_LABEL, style)), label_area);

        let hint = Line::from(Span::styled(
            CACHE_HINT,
            Style::default().fg(Color::DarkGray).italic(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(hint), chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use films_core::testing::*;

    fn rendered_button() -> RefetchButton {
        let mut render = RenderHarness::new(41, 2);
        let mut button = RefetchButton::new();
        render.render(|frame| {
            button.render(frame, frame.area(), RefetchButtonProps { is_loading: false });
        });
        button
    }

    #[test]
    fn test_render_label_and_hint() {
        let mut render = RenderHarness::new(41, 2);
        let mut button = RefetchButton::new();

        let output = render.render_to_string_plain(|frame| {
            button.render(frame, frame.area(), RefetchButtonProps { is_loading: false });
        });

        assert!(output.contains(REFETCH_LABEL));
        assert!(output.contains(CACHE_HINT));
    }

    #[test]
    fn test_label_area_is_centered() {
        let button = rendered_button();
        assert_eq!(button.area(), Some(Rect::new(15, 0, 11, 1)));
    }

    #[test]
    fn test_click_on_label_refetches() {
        let mut button = rendered_button();

        let actions = button.handle_event(&click(20, 0), RefetchButtonProps { is_loading: false });
        actions.assert_count(1);
        actions.assert_first(Action::FilmsRefetch);
    }

    #[test]
    fn test_click_elsewhere_ignored() {
        let mut button = rendered_button();

        button
            .handle_event(&click(2, 0), RefetchButtonProps { is_loading: false })
            .assert_empty();
        button
            .handle_event(&click(20, 1), RefetchButtonProps { is_loading: false })
            .assert_empty();
    }

    #[test]
    fn test_unrendered_button_ignores_clicks() {
        let mut button = RefetchButton::new();
        button
            .handle_event(&click(0, 0), RefetchButtonProps { is_loading: false })
            .assert_empty();
    }
}
