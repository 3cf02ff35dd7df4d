//! Component trait for pure UI elements
//!
//! Components render from props and emit actions; they never touch
//! `AppState` directly. Internal UI state (a cursor position, a scroll
//! offset) may live in `&mut self`, but data mutations go through
//! actions.

use ratatui::{layout::Rect, Frame};
use skydeck_core::Action;

use crate::event::EventKind;

pub trait Component {
    /// Read-only data needed to render.
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any `IntoIterator<Item = Action>`: `None` for nothing,
    /// `Some(action)` for one, `vec![...]` for several.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
