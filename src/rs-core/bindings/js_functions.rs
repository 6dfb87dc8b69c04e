use crate::wasm_bindgen;

/// # js_functions
///
/// This file lists all JavaScript functions that are callable from Rust as well as
/// struct and enumeration used by those functions.
///
/// Apart from `jsLog` and `jsGetScriptStatus`, which concern the whole page, every function
/// receives the `EmbedId` of the `TwitchEmbed` calling it, so the JavaScript-side can route
/// the call to the right container, observer and player.

#[wasm_bindgen]
extern "C" {
    // Log the given text in the JavaScript console, with the log level given.
    pub fn jsLog(log_level: LogLevel, log: &str);

    // Starts a timer for the number of milliseconds indicated by the `duration` argument.
    //
    // Once this timer has elapsed, and unless `jsClearTimer` has been called since with
    // the `TimerId` returned by this function, the `on_timer_ended` method of the
    // `TwitchEmbed` with the given `EmbedId` will be called with both the corresponding
    // `TimerId` and `reason`.
    pub fn jsTimer(embed_id: EmbedId, duration: f64, reason: TimerReason) -> TimerId;

    // Clear a timer started with `jsTimer`.
    pub fn jsClearTimer(embed_id: EmbedId, id: TimerId);

    // Look up the script element with the given id in the document and report whether it
    // exists and, if it does, whether the player library it defines is already usable or
    // whether its fetch failed.
    pub fn jsGetScriptStatus(script_id: &str) -> ScriptStatus;

    // Create a script element with the given id and source, with the `async`, `defer` and
    // `crossorigin` attributes given, and append it to the document's body.
    //
    // A failure to fetch it is remembered on the element, so `jsGetScriptStatus` reports
    // it as `Failed` afterwards.
    //
    // No listener is attached by this function, see `jsListenScript`.
    pub fn jsInjectScript(
        embed_id: EmbedId,
        script_id: &str,
        url: &str,
        is_async: bool,
        is_defer: bool,
        cross_origin: &str,
    );

    // Register on the script element with the given id a "load" listener calling the
    // `on_script_load` method of that `TwitchEmbed` and, if `with_error` is set, an "error"
    // listener calling its `on_script_error` method.
    //
    // Both listeners are one-shot.
    pub fn jsListenScript(embed_id: EmbedId, script_id: &str, with_error: bool);

    // Remove listeners previously registered through `jsListenScript` by that `TwitchEmbed`.
    //
    // The script element itself is left untouched.
    pub fn jsUnlistenScript(embed_id: EmbedId, script_id: &str);

    // Start observing the container of that `TwitchEmbed` against the viewport, extended by
    // `root_margin` pixels on each side.
    //
    // Intersection changes are then communicated through its `on_visibility_change`
    // method until `jsStopObservingVisibility` is called.
    pub fn jsObserveVisibility(embed_id: EmbedId, root_margin: u32);

    // Stop the observation started by `jsObserveVisibility`, if one.
    pub fn jsStopObservingVisibility(embed_id: EmbedId);

    // Remove everything rendered inside the player container of that `TwitchEmbed`.
    pub fn jsClearContainer(embed_id: EmbedId);

    // Construct a new `Twitch.Player` inside the container of that `TwitchEmbed`.
    //
    // On success, the JavaScript-side subscribes to the player's "ready", "error" and
    // "offline" events and forwards them to the `on_player_ready`, `on_player_error` and
    // `on_player_offline` methods, alongside the returned `PlayerHandle`.
    //
    // The constructor throwing is reported through the returned `CreatePlayerResult`.
    pub fn jsCreatePlayer(
        embed_id: EmbedId,
        channel: &str,
        parent: Vec<String>,
        width: &str,
        height: &str,
        autoplay: bool,
        muted: bool,
    ) -> CreatePlayerResult;

    // Call `destroy` on the player behind that `PlayerHandle` and forget about it.
    //
    // An exception thrown by `destroy` is reported through the returned
    // `DestroyPlayerResult`.
    pub fn jsDestroyPlayer(embed_id: EmbedId, handle: PlayerHandle) -> DestroyPlayerResult;

    // Update the DOM elements of that `TwitchEmbed`:
    //
    //   - `show_container`: whether the player container is present at all.
    //   - `container_label`: accessible label of that container.
    //   - `overlay_html`: markup displayed above the container (loading indicator) or in
    //     its place (fallback). Nothing is displayed if `None`.
    //   - `structured_data`: JSON-LD content of the `application/ld+json` script element
    //     linked to the embed. That element is removed if `None`.
    //   - `failure_reason`: why the fallback is shown, if it is.
    pub fn jsRender(
        embed_id: EmbedId,
        show_container: bool,
        container_label: &str,
        overlay_html: Option<String>,
        structured_data: Option<String>,
        failure_reason: Option<FailureReason>,
    );
}

/// State of the page-wide player script element, as seen from the document.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptStatus {
    /// No script element with the reserved id is in the document.
    Absent = 0,

    /// The script element exists but the player library is not defined yet.
    Pending = 1,

    /// The script element exists and `Twitch.Player` is available.
    Available = 2,

    /// The script element exists but could not be fetched.
    Failed = 3,
}

/// Result of calling the `jsCreatePlayer` JavaScript function.
///
/// Creation of a `CreatePlayerResult` should only be performed by the JavaScript side
/// through the exposed static constructors.
#[wasm_bindgen]
pub struct CreatePlayerResult {
    result: Result<PlayerHandle, Option<String>>,
}

#[wasm_bindgen]
impl CreatePlayerResult {
    /// Creates a `CreatePlayerResult` indicating success, with the `PlayerHandle` now
    /// identifying the new player.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn success(handle: PlayerHandle) -> Self {
        Self {
            result: Ok(handle),
        }
    }

    /// Creates a `CreatePlayerResult` indicating that the player's constructor threw, with
    /// its message if one.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn error(desc: Option<String>) -> Self {
        Self { result: Err(desc) }
    }
}

impl JsResult<PlayerHandle> for CreatePlayerResult {
    fn result(self) -> Result<PlayerHandle, Option<String>> {
        self.result
    }
}

/// Result of calling the `jsDestroyPlayer` JavaScript function.
///
/// Creation of a `DestroyPlayerResult` should only be performed by the JavaScript side
/// through the exposed static constructors.
#[wasm_bindgen]
pub struct DestroyPlayerResult {
    error: Option<Option<String>>,
}

#[wasm_bindgen]
impl DestroyPlayerResult {
    /// Creates a `DestroyPlayerResult` indicating success.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn success() -> Self {
        Self { error: None }
    }

    /// Creates a `DestroyPlayerResult` indicating that `destroy` threw.
    ///
    /// This function should only be called by the JavaScript-side.
    pub fn error(desc: Option<String>) -> Self {
        Self { error: Some(desc) }
    }
}

impl JsResult<()> for DestroyPlayerResult {
    fn result(self) -> Result<(), Option<String>> {
        match self.error {
            Some(desc) => Err(desc),
            None => Ok(()),
        }
    }
}

/// Trait allowing to convert "JavaScript Results" as exposed by the JavaScript functions into
/// `Result` structs more idiomatic to Rust.
pub(crate) trait JsResult<T> {
    fn result(self) -> Result<T, Option<String>>;
}

/// "Reason" associated to a timer started by a `TwitchEmbed`.
///
/// This can then help to identify what the timer was for once resolved.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerReason {
    /// The player took too long to announce itself as ready or failing, the loading
    /// indicator should be dismissed.
    LoadingTimeout = 0,
}

/// Levels with which a log can be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}

/// Identify a `TwitchEmbed` instance on the page.
///
/// Chosen by the JavaScript-side when constructing the `TwitchEmbed`.
pub type EmbedId = u32;

/// Identify a player constructed through `jsCreatePlayer`.
pub type PlayerHandle = u32;

/// Identify a pending timer.
pub type TimerId = f64;

pub use crate::view::FailureReason;
