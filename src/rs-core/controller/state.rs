use crate::wasm_bindgen;

/// Identify the loading state a `TwitchEmbed` is in.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing was initialized yet, the container may not even have been seen.
    Idle = 0,

    /// The player library or the player itself is loading.
    Loading = 1,

    /// The player announced being ready.
    Ready = 2,

    /// The player could not be loaded, or the channel is not available.
    Error = 3,
}

/// Events having an effect on the `LoadState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LoadEvent {
    /// A new initialization cycle begins.
    Initialize,

    /// The player emitted its "ready" event.
    PlayerReady,

    /// The script, the player's constructor or the player itself failed, or the
    /// channel is offline.
    Failed,

    /// The embed was unmounted, everything it started was freed.
    Unmounted,
}

impl LoadState {
    /// Returns the state reached when `event` happens in the current state.
    ///
    /// Only a new initialization leaves the `Error` state and a late "ready" event
    /// never hides an error.
    pub(crate) fn next(self, event: LoadEvent) -> LoadState {
        match (self, event) {
            (_, LoadEvent::Initialize) => LoadState::Loading,
            (LoadState::Loading, LoadEvent::PlayerReady) => LoadState::Ready,
            (state, LoadEvent::PlayerReady) => state,
            (_, LoadEvent::Failed) => LoadState::Error,
            (_, LoadEvent::Unmounted) => LoadState::Idle,
        }
    }

    pub(crate) fn is_error(self) -> bool {
        self == LoadState::Error
    }
}
