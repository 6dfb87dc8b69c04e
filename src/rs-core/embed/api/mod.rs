use chrono::Utc;
use wasm_bindgen::JsError;

use crate::{
    bindings::{EmbedId, JsHost},
    config::{EmbedConfig, Publisher},
    controller::{EmbedController, LoadState},
    wasm_bindgen, Logger,
};

use super::TwitchEmbed;

/// Methods exposed to the JavaScript-side.
///
/// Note that these are not the only methods callable by JavaScript. There's
/// also "event_listeners" which as its name point at, should be called when particular
/// events happen. Such "event_listeners" are defined in its own file.
#[wasm_bindgen]
impl TwitchEmbed {
    /// Create a new `TwitchEmbed` for the given channel, allowed to be embedded on the
    /// given parent domains.
    ///
    /// Nothing happens on the page until `mount` is called.
    ///
    /// Throws if the channel is not a valid Twitch channel name or if no parent domain
    /// is given.
    #[wasm_bindgen(constructor)]
    pub fn new(id: EmbedId, channel: String, parent: Vec<String>) -> Result<TwitchEmbed, JsError> {
        console_error_panic_hook::set_once();
        let config = EmbedConfig::new(channel, parent)?;
        Logger::lazy_info(&|| format!("Creating Twitch embed {id} for {}", config.channel()));
        Ok(TwitchEmbed {
            id,
            controller: EmbedController::new(JsHost::new(id), config, Utc::now()),
        })
    }

    /// Identifier given when constructing this `TwitchEmbed`.
    pub fn id(&self) -> EmbedId {
        self.id
    }

    /// Start observing the container. The player will be loaded once it gets close to the
    /// viewport.
    pub fn mount(&mut self) {
        self.controller.mount();
    }

    /// Stop everything this `TwitchEmbed` started: observation, listeners, timer and player.
    ///
    /// The `TwitchEmbed` goes back to `Idle` and may be mounted again. The shared script
    /// element is not removed.
    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    /// Go through the whole initialization again, as if the embed was remounted after
    /// becoming visible. Allows to retry after an error.
    ///
    /// A player script which failed to load is not requested again, the `TwitchEmbed`
    /// then goes right back to the `Error` state.
    pub fn reinitialize(&mut self) {
        self.controller.reinitialize();
    }

    /// Current `LoadState` of this `TwitchEmbed`.
    pub fn load_state(&self) -> LoadState {
        self.controller.state()
    }

    /// Returns `true` between a `mount` and the following `unmount`.
    pub fn is_mounted(&self) -> bool {
        self.controller.is_mounted()
    }

    /// Description of the last error encountered, if the `TwitchEmbed` is in the `Error`
    /// `LoadState`.
    pub fn error_message(&self) -> Option<String> {
        self.controller.failure().map(|e| e.to_string())
    }

    /// Time in milliseconds after which the loading indicator is hidden if the player is
    /// still loading. Defaults to 10 seconds.
    pub fn set_loading_timeout(&mut self, timeout: f64) {
        self.controller.settings_mut().loading_timeout = timeout;
    }

    /// Margin in pixels around the viewport in which the container is considered visible.
    /// Defaults to `50`.
    ///
    /// Only has an effect before `mount` is called.
    pub fn set_root_margin(&mut self, margin: u32) {
        self.controller.settings_mut().root_margin = margin;
    }

    /// Name of the stream in the structured data. A generic one is built from the
    /// channel if `None`.
    pub fn set_stream_name(&mut self, name: Option<String>) {
        self.controller.settings_mut().metadata.name = name;
    }

    /// Description of the stream in the structured data, built from the channel if `None`.
    pub fn set_stream_description(&mut self, description: Option<String>) {
        self.controller.settings_mut().metadata.description = description;
    }

    /// Person announced as the publisher of the stream in the structured data.
    pub fn set_publisher(&mut self, name: String, url: String) {
        self.controller.settings_mut().metadata.publisher = Some(Publisher { name, url });
    }
}
