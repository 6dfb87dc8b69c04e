use chrono::{DateTime, Utc};

use crate::config::{EmbedConfig, EmbedConfiguration};
use crate::controller::LoadState;
use crate::{wasm_bindgen, Logger};

mod structured_data;

pub(crate) use structured_data::VideoObject;

/// Why the fallback is displayed instead of the player.
///
/// Every reason currently leads to the same fallback, as the only thing the user can do
/// in each case is to go watch on Twitch directly.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// The player library could not be fetched.
    ScriptUnavailable = 0,

    /// The player could not be constructed or reported an error.
    PlayerFailed = 1,

    /// The channel is not live, or does not exist.
    ChannelOffline = 2,
}

/// What should be displayed for a `TwitchEmbed` at a given time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EmbedView {
    /// If `false`, the player container should not be in the document at all.
    pub(crate) show_container: bool,

    /// Accessible label of the player container.
    pub(crate) container_label: String,

    /// Loading indicator or fallback markup.
    pub(crate) overlay_html: Option<String>,

    /// `VideoObject` JSON-LD. Never set while in error.
    pub(crate) structured_data: Option<String>,

    pub(crate) failure_reason: Option<FailureReason>,
}

#[cfg(test)]
impl EmbedView {
    pub(crate) fn shows_spinner(&self) -> bool {
        self.overlay_html
            .as_deref()
            .is_some_and(|html| html.contains(SPINNER_MARKER))
    }

    pub(crate) fn shows_fallback(&self) -> bool {
        self.failure_reason.is_some()
    }
}

/// Everything needed to render an embed.
pub(crate) struct ViewInput<'a> {
    pub(crate) state: LoadState,
    pub(crate) spinner_dismissed: bool,
    pub(crate) failure_reason: Option<FailureReason>,
    pub(crate) config: &'a EmbedConfig,
    pub(crate) settings: &'a EmbedConfiguration,
    pub(crate) upload_date: DateTime<Utc>,
}

/// Produce the `EmbedView` corresponding to the given input.
///
/// - `Error`: fallback in place of the container, no structured data.
/// - `Idle` and `Loading`: container, with the loading indicator until it is dismissed.
/// - `Ready`: container alone.
pub(crate) fn render_view(input: &ViewInput<'_>) -> EmbedView {
    let container_label = format!("Twitch stream for {}", input.config.channel());
    if input.state.is_error() {
        return EmbedView {
            show_container: false,
            container_label,
            overlay_html: Some(fallback_html(input.config)),
            structured_data: None,
            failure_reason: Some(
                input
                    .failure_reason
                    .unwrap_or(FailureReason::PlayerFailed),
            ),
        };
    }

    let show_spinner = match input.state {
        LoadState::Idle | LoadState::Loading => !input.spinner_dismissed,
        LoadState::Ready | LoadState::Error => false,
    };

    let structured_data = match VideoObject::new(
        input.config,
        &input.settings.metadata,
        input.upload_date,
    )
    .to_json_ld()
    {
        Ok(json) => Some(json),
        Err(err) => {
            Logger::lazy_warn(&|| format!("Could not serialize structured data: {err}"));
            None
        }
    };

    EmbedView {
        show_container: true,
        container_label,
        overlay_html: show_spinner.then(spinner_html),
        structured_data,
        failure_reason: None,
    }
}

const SPINNER_MARKER: &str = "twitch-embed-spinner";

fn spinner_html() -> String {
    format!(
        "<div class=\"{SPINNER_MARKER} absolute inset-0 flex items-center justify-center \
bg-black/20 dark:bg-white/5\" role=\"status\">\
<div class=\"text-center\">\
<div class=\"inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-primary \
dark:border-glow mb-2\"></div>\
<p class=\"text-sm text-black/60 dark:text-white/60\">Loading stream...</p>\
</div></div>"
    )
}

/// Self-contained "offline" message linking to the channel on Twitch.
///
/// The channel name was validated by `EmbedConfig::new` and never needs escaping.
fn fallback_html(config: &EmbedConfig) -> String {
    let url = config.channel_url();
    format!(
        "<div class=\"twitch-embed-fallback absolute inset-0 flex items-center justify-center \
bg-black/10 dark:bg-white/5 p-6\">\
<div class=\"text-center max-w-md\">\
<h3 class=\"text-lg font-semibold text-black dark:text-white mb-2\">\
Stream Currently Unavailable</h3>\
<p class=\"text-sm text-black/60 dark:text-white/60 mb-4\">\
The stream may be offline or unavailable. Check back later or visit \
<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" \
class=\"text-primary dark:text-glow hover:underline\">Twitch</a> directly.</p>\
<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" \
class=\"inline-block px-4 py-2 bg-primary dark:bg-glow text-white rounded-lg \
hover:opacity-90 transition-opacity text-sm font-medium\">Visit Twitch Channel</a>\
</div></div>"
    )
}
