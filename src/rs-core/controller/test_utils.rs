use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{EmbedHost, PlayerOptions, ScriptRequest};
use crate::bindings::{EmbedId, PlayerHandle, ScriptStatus, TimerId, TimerReason};
use crate::view::EmbedView;

/// In-memory page shared by the `FakeHost` of every embed, standing in for the
/// document and the JavaScript bindings.
#[derive(Clone, Default)]
pub(crate) struct FakePage {
    inner: Rc<RefCell<PageState>>,
}

#[derive(Default)]
struct PageState {
    /// Ids of the script elements in the document, in insertion order.
    scripts: Vec<String>,
    injected: Vec<InjectedScript>,

    /// Whether `Twitch.Player` is defined.
    library_available: bool,

    /// Whether the script element failed to load.
    script_failed: bool,

    fail_construction: Option<String>,
    fail_destroy: bool,

    next_handle: PlayerHandle,
    next_timer: TimerId,
    embeds: HashMap<EmbedId, EmbedRecord>,
}

#[derive(Default)]
struct EmbedRecord {
    calls: Vec<String>,

    /// `Some(with_error)` while listening on the script element.
    script_listeners: Option<bool>,
    observed_margin: Option<u32>,
    live_players: Vec<PlayerHandle>,
    destroyed_players: Vec<PlayerHandle>,
    player_options: Vec<PlayerOptions>,
    active_timers: Vec<TimerId>,
    last_view: Option<EmbedView>,
    cleared_container: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct InjectedScript {
    pub(crate) id: String,
    pub(crate) url: String,
    pub(crate) is_async: bool,
    pub(crate) is_defer: bool,
    pub(crate) cross_origin: String,
}

impl FakePage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn host(&self, embed_id: EmbedId) -> FakeHost {
        self.inner.borrow_mut().embeds.entry(embed_id).or_default();
        FakeHost {
            embed_id,
            page: self.clone(),
        }
    }

    /// Simulate a page already containing the loaded player library.
    pub(crate) fn add_loaded_script(&self, script_id: &str) {
        let mut state = self.inner.borrow_mut();
        state.scripts.push(script_id.to_string());
        state.library_available = true;
    }

    /// Simulate the player library finishing loading. Returns the embeds whose "load"
    /// listener should now be called.
    pub(crate) fn finish_script_load(&self) -> Vec<EmbedId> {
        let mut state = self.inner.borrow_mut();
        state.library_available = true;
        listening_embeds(&state, false)
    }

    /// Simulate the player library failing to load. Returns the embeds whose "error"
    /// listener should now be called.
    pub(crate) fn fail_script_load(&self) -> Vec<EmbedId> {
        let mut state = self.inner.borrow_mut();
        state.script_failed = true;
        listening_embeds(&state, true)
    }

    pub(crate) fn fail_next_constructions(&self, message: Option<&str>) {
        self.inner.borrow_mut().fail_construction = Some(message.unwrap_or_default().to_string());
    }

    pub(crate) fn fail_destroy(&self) {
        self.inner.borrow_mut().fail_destroy = true;
    }

    pub(crate) fn script_count(&self, script_id: &str) -> usize {
        self.inner
            .borrow()
            .scripts
            .iter()
            .filter(|s| *s == script_id)
            .count()
    }

    pub(crate) fn injected_scripts(&self) -> Vec<InjectedScript> {
        self.inner.borrow().injected.clone()
    }

    pub(crate) fn script_listeners(&self, embed_id: EmbedId) -> Option<bool> {
        self.with_embed(embed_id, |e| e.script_listeners)
    }

    pub(crate) fn observed_margin(&self, embed_id: EmbedId) -> Option<u32> {
        self.with_embed(embed_id, |e| e.observed_margin)
    }

    pub(crate) fn calls(&self, embed_id: EmbedId) -> Vec<String> {
        self.with_embed(embed_id, |e| e.calls.clone())
    }

    pub(crate) fn live_players(&self, embed_id: EmbedId) -> Vec<PlayerHandle> {
        self.with_embed(embed_id, |e| e.live_players.clone())
    }

    pub(crate) fn destroyed_players(&self, embed_id: EmbedId) -> Vec<PlayerHandle> {
        self.with_embed(embed_id, |e| e.destroyed_players.clone())
    }

    pub(crate) fn player_options(&self, embed_id: EmbedId) -> Vec<PlayerOptions> {
        self.with_embed(embed_id, |e| e.player_options.clone())
    }

    pub(crate) fn active_timers(&self, embed_id: EmbedId) -> Vec<TimerId> {
        self.with_embed(embed_id, |e| e.active_timers.clone())
    }

    pub(crate) fn last_view(&self, embed_id: EmbedId) -> Option<EmbedView> {
        self.with_embed(embed_id, |e| e.last_view.clone())
    }

    pub(crate) fn cleared_container(&self, embed_id: EmbedId) -> usize {
        self.with_embed(embed_id, |e| e.cleared_container)
    }

    fn with_embed<T>(&self, embed_id: EmbedId, func: impl FnOnce(&EmbedRecord) -> T) -> T {
        let state = self.inner.borrow();
        let record = state
            .embeds
            .get(&embed_id)
            .expect("embed should have a host");
        func(record)
    }

    fn with_embed_mut<T>(
        &self,
        embed_id: EmbedId,
        func: impl FnOnce(&mut EmbedRecord) -> T,
    ) -> T {
        let mut state = self.inner.borrow_mut();
        func(state.embeds.entry(embed_id).or_default())
    }
}

fn listening_embeds(state: &PageState, for_error: bool) -> Vec<EmbedId> {
    let mut ids: Vec<EmbedId> = state
        .embeds
        .iter()
        .filter(|(_, e)| match e.script_listeners {
            Some(with_error) => !for_error || with_error,
            None => false,
        })
        .map(|(id, _)| *id)
        .collect();
    ids.sort_unstable();
    ids
}

/// `EmbedHost` of one embed living on a `FakePage`.
pub(crate) struct FakeHost {
    embed_id: EmbedId,
    page: FakePage,
}

impl FakeHost {
    fn record(&self, call: impl Into<String>) {
        let call = call.into();
        self.page.with_embed_mut(self.embed_id, |e| e.calls.push(call));
    }
}

impl EmbedHost for FakeHost {
    fn script_status(&self, script_id: &str) -> ScriptStatus {
        let state = self.page.inner.borrow();
        if !state.scripts.iter().any(|s| s == script_id) {
            ScriptStatus::Absent
        } else if state.script_failed {
            ScriptStatus::Failed
        } else if state.library_available {
            ScriptStatus::Available
        } else {
            ScriptStatus::Pending
        }
    }

    fn inject_script(&mut self, request: &ScriptRequest<'_>) {
        self.record(format!("inject_script {}", request.id));
        let mut state = self.page.inner.borrow_mut();
        state.scripts.push(request.id.to_string());
        state.injected.push(InjectedScript {
            id: request.id.to_string(),
            url: request.url.to_string(),
            is_async: request.is_async,
            is_defer: request.is_defer,
            cross_origin: request.cross_origin.to_string(),
        });
    }

    fn listen_script(&mut self, script_id: &str, with_error: bool) {
        self.record(format!("listen_script {script_id} {with_error}"));
        self.page
            .with_embed_mut(self.embed_id, |e| e.script_listeners = Some(with_error));
    }

    fn unlisten_script(&mut self, script_id: &str) {
        self.record(format!("unlisten_script {script_id}"));
        self.page
            .with_embed_mut(self.embed_id, |e| e.script_listeners = None);
    }

    fn observe_visibility(&mut self, root_margin: u32) {
        self.record(format!("observe_visibility {root_margin}"));
        self.page
            .with_embed_mut(self.embed_id, |e| e.observed_margin = Some(root_margin));
    }

    fn stop_observing_visibility(&mut self) {
        self.record("stop_observing_visibility");
        self.page
            .with_embed_mut(self.embed_id, |e| e.observed_margin = None);
    }

    fn clear_container(&mut self) {
        self.record("clear_container");
        self.page
            .with_embed_mut(self.embed_id, |e| e.cleared_container += 1);
    }

    fn create_player(&mut self, options: &PlayerOptions) -> Result<PlayerHandle, Option<String>> {
        self.record("create_player");
        let mut state = self.page.inner.borrow_mut();
        if let Some(message) = state.fail_construction.clone() {
            return Err(Some(message).filter(|m| !m.is_empty()));
        }
        state.next_handle += 1;
        let handle = state.next_handle;
        let record = state.embeds.entry(self.embed_id).or_default();
        record.live_players.push(handle);
        record.player_options.push(options.clone());
        Ok(handle)
    }

    fn destroy_player(&mut self, handle: PlayerHandle) -> Result<(), Option<String>> {
        self.record(format!("destroy_player {handle}"));
        let mut state = self.page.inner.borrow_mut();
        let fail_destroy = state.fail_destroy;
        let record = state.embeds.entry(self.embed_id).or_default();
        record.live_players.retain(|h| *h != handle);
        record.destroyed_players.push(handle);
        if fail_destroy {
            Err(Some("destroy threw".to_string()))
        } else {
            Ok(())
        }
    }

    fn start_timer(&mut self, duration: f64, _reason: TimerReason) -> TimerId {
        self.record(format!("start_timer {duration}"));
        let mut state = self.page.inner.borrow_mut();
        state.next_timer += 1.;
        let id = state.next_timer;
        state
            .embeds
            .entry(self.embed_id)
            .or_default()
            .active_timers
            .push(id);
        id
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.record(format!("clear_timer {id}"));
        self.page
            .with_embed_mut(self.embed_id, |e| e.active_timers.retain(|t| *t != id));
    }

    fn render(&mut self, view: &EmbedView) {
        let view = view.clone();
        self.page
            .with_embed_mut(self.embed_id, |e| e.last_view = Some(view));
    }
}
