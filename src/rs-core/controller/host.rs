use crate::bindings::{PlayerHandle, ScriptStatus, TimerId, TimerReason};
use crate::view::EmbedView;

/// Everything an `EmbedController` needs from the page it lives in.
///
/// In the browser this is implemented by `JsHost`, which forwards each call to the
/// corresponding `js*` function for one `TwitchEmbed`.
/// Page-wide state (the script element) is shared between the hosts of every embed,
/// everything else is specific to one embed.
pub(crate) trait EmbedHost {
    /// Look up the shared script element with the given id.
    fn script_status(&self, script_id: &str) -> ScriptStatus;

    /// Append the shared script element to the document.
    fn inject_script(&mut self, request: &ScriptRequest<'_>);

    /// Listen for "load" (and "error" if `with_error` is set) on the shared script element.
    fn listen_script(&mut self, script_id: &str, with_error: bool);

    /// Remove listeners added through `listen_script`.
    fn unlisten_script(&mut self, script_id: &str);

    /// Start reporting when the container becomes visible.
    fn observe_visibility(&mut self, root_margin: u32);

    fn stop_observing_visibility(&mut self);

    /// Remove anything left inside the player container.
    fn clear_container(&mut self);

    /// Construct the third-party player. The `Err` variant contains the message of
    /// what the constructor threw, if any.
    fn create_player(&mut self, options: &PlayerOptions) -> Result<PlayerHandle, Option<String>>;

    /// Call `destroy` on a player. The `Err` variant contains the message of what it
    /// threw, if any.
    fn destroy_player(&mut self, handle: PlayerHandle) -> Result<(), Option<String>>;

    fn start_timer(&mut self, duration: f64, reason: TimerReason) -> TimerId;

    fn clear_timer(&mut self, id: TimerId);

    fn render(&mut self, view: &EmbedView);
}

/// Attributes of the script element to create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ScriptRequest<'a> {
    pub(crate) id: &'a str,
    pub(crate) url: &'a str,
    pub(crate) is_async: bool,
    pub(crate) is_defer: bool,
    pub(crate) cross_origin: &'static str,
}

/// Options given to the `Twitch.Player` constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PlayerOptions {
    pub(crate) channel: String,
    pub(crate) parent: Vec<String>,
    pub(crate) width: &'static str,
    pub(crate) height: &'static str,

    /// Always `false`: autoplaying with sound is blocked by most browsers and autoplaying
    /// muted still produces AudioContext warnings.
    pub(crate) autoplay: bool,

    /// Always `true`, for the same reason.
    pub(crate) muted: bool,
}

impl PlayerOptions {
    pub(crate) fn new(channel: &str, parent: &[String]) -> Self {
        Self {
            channel: channel.to_string(),
            parent: parent.to_vec(),
            width: "100%",
            height: "100%",
            autoplay: false,
            muted: true,
        }
    }
}
