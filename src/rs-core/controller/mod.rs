use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::bindings::{PlayerHandle, TimerId, TimerReason};
use crate::config::{EmbedConfig, EmbedConfiguration};
use crate::script_loader::{ScriptLoader, ScriptReadiness};
use crate::view::{render_view, EmbedView, FailureReason, ViewInput};
use crate::visibility::VisibilityGate;
use crate::Logger;

mod host;
mod state;
#[cfg(test)]
pub(crate) mod test_utils;

pub(crate) use host::{EmbedHost, PlayerOptions, ScriptRequest};
pub use state::LoadState;
use state::LoadEvent;

/// Owns the whole lifecycle of one embedded Twitch player: waiting for its container to
/// be visible, loading the player library, constructing the player, following its
/// events and finally destroying it.
///
/// All side-effects go through the `EmbedHost`.
pub(crate) struct EmbedController<H: EmbedHost> {
    host: H,

    /// Channel and parent domains this embed was created with.
    config: EmbedConfig,

    settings: EmbedConfiguration,

    /// Current `LoadState`. Only updated through `LoadState::next`.
    state: LoadState,

    /// Set once the loading timer elapsed without the player announcing anything.
    /// Only hides the loading indicator.
    spinner_dismissed: bool,

    /// Set when `state` is `LoadState::Error`.
    failure: Option<EmbedError>,

    gate: VisibilityGate,

    script: ScriptLoader,

    /// The player currently constructed, if one. There's never more than one.
    player: Option<PlayerHandle>,

    /// Timer dismissing the loading indicator, pending while set.
    loading_timer: Option<TimerId>,

    is_mounted: bool,

    /// Date announced in the structured data.
    upload_date: DateTime<Utc>,
}

impl<H: EmbedHost> EmbedController<H> {
    pub(crate) fn new(host: H, config: EmbedConfig, upload_date: DateTime<Utc>) -> Self {
        let settings = EmbedConfiguration::default();
        let script = ScriptLoader::new(&settings.script_id, &settings.script_url);
        Self {
            host,
            config,
            settings,
            state: LoadState::Idle,
            spinner_dismissed: false,
            failure: None,
            gate: VisibilityGate::new(),
            script,
            player: None,
            loading_timer: None,
            is_mounted: false,
            upload_date,
        }
    }

    pub(crate) fn state(&self) -> LoadState {
        self.state
    }

    pub(crate) fn failure(&self) -> Option<&EmbedError> {
        self.failure.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn player(&self) -> Option<PlayerHandle> {
        self.player
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.is_mounted
    }

    pub(crate) fn settings_mut(&mut self) -> &mut EmbedConfiguration {
        &mut self.settings
    }

    /// Produce what should currently be displayed.
    pub(crate) fn view(&self) -> EmbedView {
        render_view(&ViewInput {
            state: self.state,
            spinner_dismissed: self.spinner_dismissed,
            failure_reason: self.failure.as_ref().map(EmbedError::reason),
            config: &self.config,
            settings: &self.settings,
            upload_date: self.upload_date,
        })
    }

    /// Start observing the container. Nothing is loaded until it becomes visible.
    pub(crate) fn mount(&mut self) {
        if self.is_mounted {
            return;
        }
        Logger::lazy_debug(&|| format!("Mounting Twitch embed for {}", self.config.channel()));
        self.is_mounted = true;
        self.gate.arm(&mut self.host, self.settings.root_margin);
        self.render();
    }

    /// Free every resource linked to this embed: its visibility observation, its
    /// listeners on the shared script element, its timer and its player.
    ///
    /// The embed goes back to `Idle`, a later `mount` starts everything over. The
    /// shared script element is kept.
    pub(crate) fn unmount(&mut self) {
        if !self.is_mounted {
            return;
        }
        Logger::lazy_debug(&|| format!("Unmounting Twitch embed for {}", self.config.channel()));
        self.is_mounted = false;
        self.gate.disarm(&mut self.host);
        self.script.detach(&mut self.host);
        self.dispose();
        self.failure = None;
        self.spinner_dismissed = false;
        self.transition(LoadEvent::Unmounted);
    }

    /// Start a new initialization cycle, as a remount would.
    ///
    /// Does nothing if the container was not seen yet, the visibility gate will take
    /// care of it.
    pub(crate) fn reinitialize(&mut self) {
        if !self.is_mounted || !self.gate.has_triggered() {
            return;
        }
        Logger::info("Re-initializing Twitch embed");
        self.begin_loading();
    }

    pub(crate) fn on_visibility_change(&mut self, is_intersecting: bool) {
        if !self.is_mounted {
            return;
        }
        if self.gate.on_intersection(&mut self.host, is_intersecting) {
            Logger::debug("Twitch embed container is visible, initializing");
            self.begin_loading();
        }
    }

    pub(crate) fn on_script_loaded(&mut self) {
        if !self.script.on_loaded(&mut self.host) {
            return;
        }
        Logger::debug("Twitch script loaded");
        if self.state == LoadState::Loading {
            self.construct_player();
        }
    }

    pub(crate) fn on_script_failed(&mut self) {
        if !self.script.on_failed(&mut self.host) {
            return;
        }
        let url = self.script.script_url().to_string();
        self.fail(EmbedError::ScriptLoad { url });
    }

    pub(crate) fn on_player_ready(&mut self, handle: PlayerHandle) {
        if !self.is_current_player(handle) {
            return;
        }
        Logger::info("Twitch player ready");
        self.clear_loading_timer();
        self.transition(LoadEvent::PlayerReady);
        self.render();
    }

    pub(crate) fn on_player_error(&mut self, handle: PlayerHandle, message: Option<String>) {
        if !self.is_current_player(handle) {
            return;
        }
        self.fail(EmbedError::Player {
            message: message.unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    pub(crate) fn on_player_offline(&mut self, handle: PlayerHandle) {
        if !self.is_current_player(handle) {
            return;
        }
        let channel = self.config.channel().to_string();
        self.fail(EmbedError::Offline { channel });
    }

    pub(crate) fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) {
        match reason {
            TimerReason::LoadingTimeout => {
                if self.loading_timer != Some(id) {
                    return;
                }
                self.loading_timer = None;
                Logger::warn("Twitch player still not ready, hiding the loading indicator");
                self.spinner_dismissed = true;
                self.render();
            }
        }
    }

    /// Enter `Loading` and make sure the player library is there. The player is
    /// constructed right away if it already is.
    fn begin_loading(&mut self) {
        self.dispose();
        self.failure = None;
        self.spinner_dismissed = false;
        self.transition(LoadEvent::Initialize);
        self.render();
        match self.script.ensure(&mut self.host) {
            ScriptReadiness::Ready => self.construct_player(),
            ScriptReadiness::Pending => {}
            ScriptReadiness::Failed => {
                let url = self.script.script_url().to_string();
                self.fail(EmbedError::ScriptLoad { url });
            }
        }
    }

    fn construct_player(&mut self) {
        self.dispose();
        self.host.clear_container();
        self.failure = None;
        self.spinner_dismissed = false;
        self.transition(LoadEvent::Initialize);

        let options = PlayerOptions::new(self.config.channel(), self.config.parent_domains());
        match self.host.create_player(&options) {
            Ok(handle) => {
                Logger::lazy_debug(&|| format!("Twitch player {handle} constructed"));
                self.player = Some(handle);
                self.loading_timer = Some(
                    self.host
                        .start_timer(self.settings.loading_timeout, TimerReason::LoadingTimeout),
                );
                self.render();
            }
            Err(message) => self.fail(EmbedError::Construction {
                message: message.unwrap_or_else(|| "Unknown error".to_string()),
            }),
        }
    }

    /// Enter `Error`. The player, if one, is destroyed and the container emptied as
    /// only the fallback is displayed from then on.
    fn fail(&mut self, err: EmbedError) {
        Logger::lazy_warn(&|| format!("Twitch embed error: {err}"));
        self.dispose();
        self.host.clear_container();
        self.failure = Some(err);
        self.transition(LoadEvent::Failed);
        self.render();
    }

    /// Clear the loading timer and destroy the player, if any.
    ///
    /// A player throwing when destroyed is ignored, there's nothing more we could do
    /// with it.
    fn dispose(&mut self) {
        self.clear_loading_timer();
        if let Some(handle) = self.player.take() {
            if let Err(err) = self.host.destroy_player(handle).map_err(DestroyPlayerError::from) {
                Logger::lazy_debug(&|| format!("Ignored error on player {handle}: {err}"));
            }
        }
    }

    fn clear_loading_timer(&mut self) {
        if let Some(id) = self.loading_timer.take() {
            self.host.clear_timer(id);
        }
    }

    fn is_current_player(&self, handle: PlayerHandle) -> bool {
        self.player == Some(handle)
    }

    fn transition(&mut self, event: LoadEvent) {
        let next = self.state.next(event);
        if next != self.state {
            Logger::lazy_debug(&|| format!("LoadState: {:?} -> {:?}", self.state, next));
        }
        self.state = next;
    }

    fn render(&mut self) {
        if self.is_mounted {
            let view = self.view();
            self.host.render(&view);
        }
    }
}

impl<H: EmbedHost> Drop for EmbedController<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Reason for which an embed ended up in the `Error` state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum EmbedError {
    #[error("Could not load the Twitch player script from {url}")]
    ScriptLoad { url: String },
    #[error("Could not construct the Twitch player: {message}")]
    Construction { message: String },
    #[error("The Twitch player reported an error: {message}")]
    Player { message: String },
    #[error("The channel `{channel}` is offline or unavailable")]
    Offline { channel: String },
}

impl EmbedError {
    pub(crate) fn reason(&self) -> FailureReason {
        match self {
            EmbedError::ScriptLoad { .. } => FailureReason::ScriptUnavailable,
            EmbedError::Construction { .. } | EmbedError::Player { .. } => {
                FailureReason::PlayerFailed
            }
            EmbedError::Offline { .. } => FailureReason::ChannelOffline,
        }
    }
}

/// Error thrown by a player's `destroy` method.
#[derive(Error, Debug)]
#[error("Player destruction failed: {message}")]
pub(crate) struct DestroyPlayerError {
    message: String,
}

impl From<Option<String>> for DestroyPlayerError {
    fn from(desc: Option<String>) -> Self {
        Self {
            message: desc.unwrap_or_else(|| "Unknown Error.".to_string()),
        }
    }
}
