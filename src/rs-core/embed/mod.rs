use crate::{bindings::JsHost, controller::EmbedController, wasm_bindgen};

mod api;
mod event_listeners;

/// The `TwitchEmbed` is the live-stream embed interface exported to the JavaScript-side.
///
/// One `TwitchEmbed` should be created per embed container on the page. It then decides,
/// through the `js*` functions, when to load the Twitch player library, when to construct the
/// player and what to display, while the JavaScript-side forwards it the corresponding
/// browser events through its `on_*` methods.
#[wasm_bindgen]
pub struct TwitchEmbed {
    /// Identifier given by the JavaScript-side, communicated back with each `js*` call.
    id: u32,

    controller: EmbedController<JsHost>,
}
