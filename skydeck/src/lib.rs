//! skydeck TUI - the presentation shell over `skydeck-core`
//!
//! Event flow, in the core's Redux shape:
//! 1. Terminal event -> [`Ui::map_event`](ui::Ui) -> actions
//! 2. Actions dispatched to the store; the reducer returns effects
//! 3. Effects spawn fetch tasks via the task manager
//! 4. Completed tasks post `Did*` actions back to the loop
//! 5. If state changed, re-render with the active theme's palette

pub mod component;
pub mod components;
pub mod effects;
pub mod event;
pub mod palette;
pub mod runtime;
pub mod testing;
pub mod ui;

pub use component::Component;
pub use event::EventKind;
pub use palette::Palette;
pub use runtime::Runtime;
pub use ui::Ui;
