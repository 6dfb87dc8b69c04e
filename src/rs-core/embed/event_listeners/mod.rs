use crate::{
    bindings::{PlayerHandle, TimerId, TimerReason},
    embed::TwitchEmbed,
    wasm_bindgen,
};

/// Methods triggered on JavaScript events by the JavaScript code.
#[wasm_bindgen]
impl TwitchEmbed {
    /// The JS code should call this method each time the IntersectionObserver started by
    /// `jsObserveVisibility` reports an entry for the container.
    ///
    /// # Arguments
    ///
    /// * `is_intersecting` - `true` if the container now intersects with the viewport,
    ///   extended by the configured margin.
    pub fn on_visibility_change(&mut self, is_intersecting: bool) {
        self.controller.on_visibility_change(is_intersecting);
    }

    /// The JS code should call this method when the "load" event is triggered on the script
    /// element, after a `jsListenScript` call.
    pub fn on_script_load(&mut self) {
        self.controller.on_script_loaded();
    }

    /// The JS code should call this method when the "error" event is triggered on the
    /// script element, after a `jsListenScript` call with `with_error` set.
    pub fn on_script_error(&mut self) {
        self.controller.on_script_failed();
    }

    /// The JS code should call this method when a player created through `jsCreatePlayer`
    /// emits its `Twitch.Player.READY` event.
    ///
    /// # Arguments
    ///
    /// * `handle` - The `PlayerHandle` returned when that player was created. Events from
    ///   a player which was since destroyed are ignored.
    pub fn on_player_ready(&mut self, handle: PlayerHandle) {
        self.controller.on_player_ready(handle);
    }

    /// The JS code should call this method when a player created through `jsCreatePlayer`
    /// emits its `Twitch.Player.ERROR` event.
    ///
    /// # Arguments
    ///
    /// * `handle` - The `PlayerHandle` returned when that player was created.
    ///
    /// * `message` - Description of the error, if one could be obtained.
    pub fn on_player_error(&mut self, handle: PlayerHandle, message: Option<String>) {
        self.controller.on_player_error(handle, message);
    }

    /// The JS code should call this method when a player created through `jsCreatePlayer`
    /// emits its `Twitch.Player.OFFLINE` event.
    pub fn on_player_offline(&mut self, handle: PlayerHandle) {
        self.controller.on_player_offline(handle);
    }

    /// The JS code should call this method each time a timer started with the `jsTimer`
    /// function finished.
    ///
    /// # Arguments
    ///
    /// * `id` - The `TimerId` given by `jsTimer` when the timer was
    ///   started.
    ///
    /// * `reason` - The `TimerReason` given by the Rust code when that timer
    ///   was started.
    pub fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) {
        self.controller.on_timer_ended(id, reason);
    }
}
