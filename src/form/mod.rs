// src/form/mod.rs
//! Targeted broadcast forms.
//!
//! A form fetches its reference lists on mount, lets the operator toggle
//! target servers and players, and sends one POST per valid submit. The two
//! console forms only differ in their primary input and payload, which a
//! [`FormKind`] supplies.
//!
//! `mount` and `submit` spawn onto the current Tokio runtime. Every spawned
//! task belongs to the form: tearing the form down aborts them, and a task
//! that resolves after teardown leaves no trace. Tasks that do finish signal
//! [`TargetedForm::changed`] so a view can redraw without waiting on them.

pub mod command;
pub mod message;
mod selection;

pub use command::{CommandForm, CommandInput, CommandKind};
pub use message::{MessageForm, MessageKind};
pub use selection::Selection;

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};

use log::{debug, error, info, warn};
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::models::{Command, Player, PlayerId, Server, ServerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyMessage,
    NoCommand,
    NoTargets,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "Please enter a message"),
            Self::NoCommand => write!(f, "Please select a command"),
            Self::NoTargets => write!(f, "Please select at least one server or player"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Selected recipients at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    pub servers: Vec<ServerId>,
    pub players: Vec<PlayerId>,
}

impl Targets {
    /// At least one server or player must be picked.
    pub fn require(self) -> Result<Self, ValidationError> {
        if self.servers.is_empty() && self.players.is_empty() {
            return Err(ValidationError::NoTargets);
        }
        Ok(self)
    }
}

/// What makes one form differ from the other.
pub trait FormKind: 'static {
    /// The primary field(s) the operator fills in.
    type Input: Default + Clone + fmt::Debug + Send + 'static;
    type Payload: Serialize + Send + Sync + 'static;

    const TITLE: &'static str;
    const ENDPOINT: &'static str;
    const SUBMIT_LABEL: &'static str;
    const BUSY_LABEL: &'static str;
    const SUCCESS: &'static str;
    /// Prefix of the banner shown when the POST fails.
    const FAILURE: &'static str;
    /// Whether the form needs the command catalog.
    const LOADS_COMMANDS: bool;

    /// Checks the primary input first, then the targets, and builds the
    /// request body.
    fn payload(input: &Self::Input, targets: Targets) -> Result<Self::Payload, ValidationError>;

    /// Text lines for the primary input section.
    fn input_lines(state: &FormState<Self::Input>) -> Vec<String>;
}

#[derive(Debug, Clone)]
pub struct FormState<I> {
    pub servers: Vec<Server>,
    pub players: Vec<Player>,
    pub commands: Vec<Command>,
    pub selected_servers: Selection<ServerId>,
    pub selected_players: Selection<PlayerId>,
    pub input: I,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl<I: Default> Default for FormState<I> {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            players: Vec::new(),
            commands: Vec::new(),
            selected_servers: Selection::default(),
            selected_players: Selection::default(),
            input: I::default(),
            loading: false,
            error: None,
            success: None,
        }
    }
}

impl<I: Default> FormState<I> {
    fn targets(&self) -> Targets {
        Targets {
            servers: self.selected_servers.as_slice().to_vec(),
            players: self.selected_players.as_slice().to_vec(),
        }
    }

    fn reset_inputs(&mut self) {
        self.input = I::default();
        self.selected_servers.clear();
        self.selected_players.clear();
    }
}

/// Result of ticking a server or player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
    /// Not in the fetched list, so it cannot be picked. Nothing changed.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request is on its way; the banner is set once it settles.
    Dispatched,
    /// Validation failed and the error banner was set. Nothing was sent.
    Rejected(ValidationError),
    /// A previous submit is still outstanding.
    Busy,
}

type SharedState<I> = Arc<Mutex<FormState<I>>>;

pub struct TargetedForm<K: FormKind> {
    client: ApiClient,
    state: SharedState<K::Input>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
    changed: Arc<Notify>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: FormKind> TargetedForm<K> {
    pub fn new(config: &Config) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(FormState::default())),
            tasks: Mutex::new(Vec::new()),
            changed: Arc::new(Notify::new()),
            _kind: PhantomData,
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> FormState<K::Input> {
        self.state.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    /// Issues the reference list fetches. They run concurrently and each
    /// one only touches its own list (and the error banner on failure).
    pub fn mount(&self) {
        info!("Mounting '{}' against {}", K::TITLE, self.client.base_url());

        self.spawn_load(
            "servers",
            |client| async move { client.fetch_servers().await },
            |state, servers| state.servers = servers,
        );
        self.spawn_load(
            "players",
            |client| async move { client.fetch_players().await },
            |state, players| state.players = players,
        );
        if K::LOADS_COMMANDS {
            self.spawn_load(
                "commands",
                |client| async move { client.fetch_commands().await },
                |state, commands| state.commands = commands,
            );
        }
    }

    /// Resolves once a fetch or submit has updated the state. A signal sent
    /// while nobody waits is kept for the next call.
    pub async fn changed(&self) {
        self.changed.notified().await;
    }

    /// Unticks `id` if selected. Otherwise ticks it, provided it is in the
    /// fetched server list.
    pub fn toggle_server(&self, id: ServerId) -> Toggle {
        let mut state = self.state.lock();
        let known = state.servers.iter().any(|server| server.id == id);
        let toggle = toggle_known(&mut state.selected_servers, id, known);
        debug!("'{}': server {} {:?}", K::TITLE, id, toggle);
        toggle
    }

    /// Same rules as [`toggle_server`](Self::toggle_server), against the
    /// fetched player list.
    pub fn toggle_player(&self, id: PlayerId) -> Toggle {
        let mut state = self.state.lock();
        let known = state.players.iter().any(|player| player.id == id);
        let toggle = toggle_known(&mut state.selected_players, id, known);
        debug!("'{}': player {} {:?}", K::TITLE, id, toggle);
        toggle
    }

    pub(crate) fn update_input(&self, update: impl FnOnce(&mut K::Input)) {
        update(&mut self.state.lock().input);
    }

    pub fn submit(&self) -> SubmitOutcome {
        let payload = {
            let mut state = self.state.lock();
            if state.loading {
                debug!("'{}': submit ignored, request outstanding", K::TITLE);
                return SubmitOutcome::Busy;
            }

            let targets = state.targets();
            match K::payload(&state.input, targets) {
                Ok(payload) => {
                    state.error = None;
                    state.success = None;
                    state.loading = true;
                    payload
                }
                Err(e) => {
                    warn!("'{}': {}", K::TITLE, e);
                    state.error = Some(e.to_string());
                    return SubmitOutcome::Rejected(e);
                }
            }
        };

        let client = self.client.clone();
        let state = Arc::downgrade(&self.state);
        let changed = self.changed.clone();
        self.track(tokio::spawn(async move {
            let result = client.post_json(K::ENDPOINT, &payload).await;
            settle_submit::<K>(&state, result);
            changed.notify_one();
        }));
        SubmitOutcome::Dispatched
    }

    /// Waits for every task the form has started so far, including ones
    /// started while waiting.
    pub async fn settle(&self) {
        loop {
            let pending = std::mem::take(&mut *self.tasks.lock());
            if pending.is_empty() {
                return;
            }
            for handle in pending {
                if let Err(e) = handle.await {
                    if !e.is_cancelled() {
                        error!("'{}': form task failed: {}", K::TITLE, e);
                    }
                }
            }
        }
    }

    /// Number of started tasks that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.tasks.lock().iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Aborts everything in flight. Inputs and banners stay as they are and
    /// the form is no longer loading, so it can be submitted again.
    pub fn teardown(&self) {
        let pending = std::mem::take(&mut *self.tasks.lock());
        if !pending.is_empty() {
            debug!("'{}': cancelling {} task(s)", K::TITLE, pending.len());
        }
        for handle in pending {
            handle.abort();
        }
        self.state.lock().loading = false;
    }

    fn spawn_load<T, F, Fut>(
        &self,
        what: &'static str,
        fetch: F,
        store: fn(&mut FormState<K::Input>, Vec<T>),
    ) where
        T: Send + 'static,
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + Send + 'static,
    {
        let request = fetch(self.client.clone());
        let state = Arc::downgrade(&self.state);
        let changed = self.changed.clone();
        self.track(tokio::spawn(async move {
            let result = request.await;
            let Some(state) = state.upgrade() else {
                return;
            };
            let mut state = state.lock();
            match result {
                Ok(items) => {
                    debug!("'{}': loaded {} {}", K::TITLE, items.len(), what);
                    store(&mut *state, items);
                }
                Err(e) => {
                    error!("'{}': failed to load {}: {}", K::TITLE, what, e);
                    state.error = Some(format!("Failed to load {}: {}", what, e));
                }
            }
            drop(state);
            changed.notify_one();
        }));
    }

    fn track(&self, handle: JoinHandle<()>) {
        let mut tasks = self.tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }
}

fn toggle_known<Id: Copy + Eq>(selection: &mut Selection<Id>, id: Id, known: bool) -> Toggle {
    if selection.contains(id) || known {
        if selection.toggle(id) {
            Toggle::Selected
        } else {
            Toggle::Deselected
        }
    } else {
        Toggle::Unknown
    }
}

fn settle_submit<K: FormKind>(state: &Weak<Mutex<FormState<K::Input>>>, result: Result<(), ApiError>) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut state = state.lock();
    state.loading = false;
    match result {
        Ok(()) => {
            info!("'{}': {}", K::TITLE, K::SUCCESS);
            state.success = Some(K::SUCCESS.to_string());
            state.reset_inputs();
        }
        Err(e) => {
            error!("'{}': {}: {}", K::TITLE, K::FAILURE, e);
            state.error = Some(format!("{}: {}", K::FAILURE, e));
        }
    }
}

impl<K: FormKind> Drop for TargetedForm<K> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_are_not_ticked() {
        let mut selection = Selection::default();
        assert_eq!(toggle_known(&mut selection, ServerId(999), false), Toggle::Unknown);
        assert!(selection.is_empty());

        assert_eq!(toggle_known(&mut selection, ServerId(1), true), Toggle::Selected);
        assert_eq!(toggle_known(&mut selection, ServerId(1), true), Toggle::Deselected);
    }

    #[test]
    fn stale_ids_can_still_be_unticked() {
        let mut selection = Selection::default();
        selection.toggle(PlayerId(7));

        // Player 7 vanished from the last fetch.
        assert_eq!(toggle_known(&mut selection, PlayerId(7), false), Toggle::Deselected);
        assert!(selection.is_empty());
        assert_eq!(toggle_known(&mut selection, PlayerId(7), false), Toggle::Unknown);
    }
}
