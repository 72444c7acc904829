use crate::debounce::TimerSlot;
use crate::error::{PinboardError, Result};
use crate::github::RepoSearch;
use crate::types::SearchPage;
use crate::view::{EntryId, View};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort, SpawnErr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);
pub const DEFAULT_BLUR_GRACE: Duration = Duration::from_millis(200);

/// Configuration for the search controller
#[derive(Debug, Clone)]
pub struct SearchControllerConfig {
    pub title: String,
    /// Quiet period after the last keystroke before a query fires
    pub debounce: Duration,
    /// Delay between losing focus and hiding the dropdown
    pub blur_grace: Duration,
}

impl Default for SearchControllerConfig {
    fn default() -> Self {
        Self {
            title: "GitHub Repository Search".to_string(),
            debounce: DEFAULT_DEBOUNCE,
            blur_grace: DEFAULT_BLUR_GRACE,
        }
    }
}

/// An edit applied to the search input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    DeleteBack,
    Replace(String),
}

/// Where a click landed, relative to the search line (input plus dropdown)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    SearchLine,
    Outside,
}

/// Messages the controller can handle
#[derive(Debug)]
pub enum SearchControllerMessage {
    /// The search input changed
    Input(InputEdit),
    /// The search input gained focus
    Focus,
    /// The search input lost focus
    Blur,
    /// A click anywhere in the widget
    Click(ClickTarget),
    /// A dropdown entry was clicked
    SelectSuggestion(usize),
    /// The delete control of a pinned entry was activated
    DeletePinned(EntryId),
    /// Snapshot of the current view
    GetView(RpcReplyPort<View>),
    /// The debounce timer of the given generation ran out
    DebounceElapsed(u64),
    /// The blur grace timer of the given generation ran out
    BlurGraceElapsed(u64),
    SearchFinished {
        seq: u64,
        outcome: Result<SearchPage>,
    },
}

/// Turns input events into debounced searches and drives the view
pub struct SearchController;

/// State for the search controller
pub struct SearchControllerState {
    view: View,
    backend: Arc<dyn RepoSearch>,
    debounce: TimerSlot<SearchControllerMessage>,
    blur_grace: TimerSlot<SearchControllerMessage>,
    /// Sequence number of the newest request; older completions are dropped
    latest_seq: u64,
    snapshots: watch::Sender<View>,
}

/// Arguments for starting the controller
pub struct SearchControllerArgs {
    pub config: SearchControllerConfig,
    pub backend: Arc<dyn RepoSearch>,
    pub snapshots: watch::Sender<View>,
}

/// A running widget: the controller actor plus the feed of view snapshots.
pub struct SearchWidget {
    actor: ActorRef<SearchControllerMessage>,
    handle: JoinHandle<()>,
    snapshots: watch::Receiver<View>,
}

impl SearchController {
    /// Spawn the controller and return a handle to the running widget
    pub async fn start(
        config: SearchControllerConfig,
        backend: Arc<dyn RepoSearch>,
    ) -> std::result::Result<SearchWidget, SpawnErr> {
        let (tx, rx) = watch::channel(View::new(config.title.clone()));

        let args = SearchControllerArgs {
            config,
            backend,
            snapshots: tx,
        };

        let (actor, handle) = Actor::spawn(None, SearchController, args).await?;

        info!("Search controller started");
        Ok(SearchWidget {
            actor,
            handle,
            snapshots: rx,
        })
    }
}

impl SearchWidget {
    /// A fresh receiver that yields every published view.
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.snapshots.clone()
    }

    pub fn send(&self, message: SearchControllerMessage) -> Result<()> {
        self.actor
            .send_message(message)
            .map_err(|e| PinboardError::ActorError(format!("Failed to send message: {}", e)))
    }

    pub async fn view(&self) -> Result<View> {
        match self
            .actor
            .call(
                SearchControllerMessage::GetView,
                Some(Duration::from_secs(5)),
            )
            .await
        {
            Ok(ractor::rpc::CallResult::Success(view)) => Ok(view),
            Ok(ractor::rpc::CallResult::Timeout) => {
                Err(PinboardError::ActorError("Timeout getting view".to_string()))
            }
            Ok(ractor::rpc::CallResult::SenderError) => {
                Err(PinboardError::ActorError("Sender error getting view".to_string()))
            }
            Err(e) => Err(PinboardError::ActorError(format!("Failed to get view: {}", e))),
        }
    }

    /// Stop the controller, cancelling its timers and closing the snapshot feed.
    pub async fn dispose(self) -> Result<()> {
        self.actor.stop(Some("Widget disposed".to_string()));
        self.handle
            .await
            .map_err(|e| PinboardError::ActorError(format!("Controller task failed: {}", e)))
    }
}

impl SearchControllerState {
    fn publish(&self) {
        let view = &self.view;
        self.snapshots.send_if_modified(|current| {
            if current != view {
                *current = view.clone();
                true
            } else {
                false
            }
        });
    }

    /// Hide the dropdown and invalidate any request still in flight.
    fn dismiss(&mut self) {
        self.view.hide_autocomplete();
        self.latest_seq += 1;
    }
}

impl SearchController {
    fn run_query(myself: &ActorRef<SearchControllerMessage>, state: &mut SearchControllerState) {
        let query = state.view.trimmed_query().to_owned();

        if query.is_empty() {
            state.view.set_counter(None);
            state.dismiss();
            return;
        }

        state.latest_seq += 1;
        let seq = state.latest_seq;
        let backend = state.backend.clone();
        let myself = myself.clone();

        debug!(seq, %query, "Issuing repository search");

        tokio::spawn(async move {
            let outcome = backend.search_repositories(&query).await;
            let finished = SearchControllerMessage::SearchFinished { seq, outcome };
            if let Err(e) = myself.send_message(finished) {
                debug!(seq, "Controller gone before search finished: {}", e);
            }
        });
    }

    fn finish_search(state: &mut SearchControllerState, seq: u64, outcome: Result<SearchPage>) {
        if seq != state.latest_seq {
            debug!(seq, latest = state.latest_seq, "Dropping stale search response");
            return;
        }

        match outcome {
            Ok(page) => {
                debug!(seq, items = page.items.len(), "Rendering suggestions");
                state.view.set_counter(Some(page.total_count));
                state.view.render_autocomplete(page.items);
            }
            Err(PinboardError::UnexpectedStatus(status)) => {
                warn!(%status, "GitHub API error");
                state.view.hide_autocomplete();
            }
            Err(e) => {
                error!("Search error: {}", e);
                state.view.hide_autocomplete();
            }
        }
    }
}

#[ractor::async_trait]
impl Actor for SearchController {
    type Msg = SearchControllerMessage;
    type State = SearchControllerState;
    type Arguments = SearchControllerArgs;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> std::result::Result<Self::State, ActorProcessingErr> {
        debug!(
            debounce_ms = args.config.debounce.as_millis() as u64,
            blur_grace_ms = args.config.blur_grace.as_millis() as u64,
            "Starting search controller"
        );

        let state = SearchControllerState {
            view: View::new(args.config.title),
            backend: args.backend,
            debounce: TimerSlot::new(args.config.debounce),
            blur_grace: TimerSlot::new(args.config.blur_grace),
            latest_seq: 0,
            snapshots: args.snapshots,
        };
        state.publish();

        Ok(state)
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        match message {
            SearchControllerMessage::Input(edit) => {
                match edit {
                    InputEdit::Insert(c) => state.view.insert_char(c),
                    InputEdit::DeleteBack => state.view.delete_back(),
                    InputEdit::Replace(value) => state.view.set_input(value),
                }
                state
                    .debounce
                    .restart(&myself, SearchControllerMessage::DebounceElapsed);
            }

            SearchControllerMessage::DebounceElapsed(generation) => {
                if state.debounce.fired(generation) {
                    Self::run_query(&myself, state);
                } else {
                    debug!(generation, "Ignoring superseded debounce timer");
                }
            }

            SearchControllerMessage::Focus => {
                if !state.view.trimmed_query().is_empty() {
                    state.debounce.cancel();
                    Self::run_query(&myself, state);
                }
            }

            SearchControllerMessage::Blur => {
                state
                    .blur_grace
                    .restart(&myself, SearchControllerMessage::BlurGraceElapsed);
            }

            SearchControllerMessage::BlurGraceElapsed(generation) => {
                if state.blur_grace.fired(generation) {
                    state.dismiss();
                } else {
                    debug!(generation, "Ignoring superseded blur timer");
                }
            }

            SearchControllerMessage::Click(ClickTarget::Outside) => {
                state.dismiss();
            }

            SearchControllerMessage::Click(ClickTarget::SearchLine) => {}

            SearchControllerMessage::SelectSuggestion(index) => {
                match state.view.select_suggestion(index) {
                    Some(selection) => {
                        info!(
                            name = %selection.result.name,
                            pinned = selection.pinned.is_some(),
                            "Suggestion selected"
                        );
                        state.latest_seq += 1;
                    }
                    None => {
                        debug!(index, "Ignoring selection of a missing suggestion");
                    }
                }
            }

            SearchControllerMessage::DeletePinned(id) => {
                if state.view.delete_pinned(id) {
                    info!(?id, "Pinned entry deleted");
                }
            }

            SearchControllerMessage::GetView(reply) => {
                if !reply.is_closed() {
                    let _ = reply.send(state.view.clone());
                }
            }

            SearchControllerMessage::SearchFinished { seq, outcome } => {
                Self::finish_search(state, seq, outcome);
            }
        }

        state.publish();
        Ok(())
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        state.debounce.cancel();
        state.blur_grace.cancel();
        info!(
            pinned = state.view.pinned_count(),
            "Search controller stopped"
        );
        Ok(())
    }
}
