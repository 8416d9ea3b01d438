//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI element that renders from props and turns input into actions
///
/// `render` must depend only on the props plus purely visual bookkeeping kept
/// in `&mut self` (for example the last drawn area of a button, used for
/// mouse hit-testing). Data changes always go out as actions.
///
/// ```ignore
/// #[derive(Default)]
/// struct RefetchButton { area: Option<Rect> }
///
/// impl Component<Action> for RefetchButton {
///     type Props<'a> = RefetchButtonProps;
///
///     fn handle_event(&mut self, event: &EventKind, _: RefetchButtonProps) -> Vec<Action> {
///         match self.area {
///             Some(area) if event.is_click_in(area) => vec![Action::FilmsRefetch],
///             _ => vec![],
///         }
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, _: RefetchButtonProps) {
///         self.area = Some(area);
///         frame.render_widget(Paragraph::new("[ Refetch ]"), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Render-only components keep the default, which emits nothing.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
