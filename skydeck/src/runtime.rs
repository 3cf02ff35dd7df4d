//! The event/action/render loop
//!
//! One `select!` over terminal events, completed-task actions, and the
//! spinner tick. Dispatch goes store -> reducer -> effects -> task
//! manager; a render happens only when the reducer reports a change.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use skydeck_core::{reduce, Action, AppState, Store, TaskManager, ThemeService};

use crate::effects::{self, Services};
use crate::event::{spawn_event_poller, EventKind};
use crate::ui::Ui;

/// Spinner frame advance interval.
const SPINNER_TICK: Duration = Duration::from_millis(120);

pub struct Runtime {
    store: Store,
    tasks: TaskManager,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    should_render: bool,
}

impl Runtime {
    pub fn new(state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store: Store::new(state, reduce),
            tasks: TaskManager::new(action_tx.clone()),
            action_tx,
            action_rx,
            should_render: true,
        }
    }

    /// Queue an action before or during the loop.
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Run until a `Quit` action arrives.
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        ui: &mut Ui,
        services: Arc<Services>,
        theme: &ThemeService,
    ) -> io::Result<()> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, cancel_token.clone());

        let mut spinner = tokio::time::interval(SPINNER_TICK);

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| ui.render(frame, frame.area(), state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(event) = event_rx.recv() => {
                    if matches!(event, EventKind::Resize(_, _)) {
                        self.should_render = true;
                    }
                    for action in ui.map_event(&event, self.store.state()) {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if matches!(action, Action::Quit) {
                        break;
                    }
                    let result = self.store.dispatch(action);
                    for effect in result.effects {
                        effects::handle(effect, &mut self.tasks, &services, theme);
                    }
                    if result.changed {
                        self.should_render = true;
                    }
                }

                _ = spinner.tick() => {
                    let _ = self.action_tx.send(Action::Tick);
                }
            }
        }

        cancel_token.cancel();
        self.tasks.cancel_all();
        Ok(())
    }
}
