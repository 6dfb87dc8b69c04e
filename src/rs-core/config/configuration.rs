const DEFAULT_LOADING_TIMEOUT: f64 = 10000.;
const DEFAULT_ROOT_MARGIN: u32 = 50;

/// Id reserved for the script element loading the Twitch embed library.
/// It is shared by every `TwitchEmbed` on the page.
const TWITCH_SCRIPT_ID: &str = "twitch-embed-script";
const TWITCH_SCRIPT_URL: &str = "https://player.twitch.tv/js/embed/v1.js";

/// Inner configuration on which a `TwitchEmbed` relies.
/// Can be updated through the corresponding `TwitchEmbed` setters, before mounting it.
pub(crate) struct EmbedConfiguration {
    /// Time, in milliseconds, after which the loading indicator is dismissed if the player
    /// did not announce being ready or failing.
    ///
    /// Reaching it does not put the embed in error: the player may still become ready later.
    pub(crate) loading_timeout: f64,

    /// Margin, in pixels, added around the viewport when checking if the embed's container
    /// is visible. Allows to begin loading the player slightly before it is seen.
    pub(crate) root_margin: u32,

    /// Id of the script element loading the player library.
    pub(crate) script_id: String,

    /// URL of the player library.
    pub(crate) script_url: String,

    /// Information announced through the `VideoObject` structured data.
    pub(crate) metadata: StreamMetadata,
}

impl Default for EmbedConfiguration {
    fn default() -> Self {
        Self {
            loading_timeout: DEFAULT_LOADING_TIMEOUT,
            root_margin: DEFAULT_ROOT_MARGIN,
            script_id: TWITCH_SCRIPT_ID.to_string(),
            script_url: TWITCH_SCRIPT_URL.to_string(),
            metadata: StreamMetadata::default(),
        }
    }
}

/// Describes the stream for search engines.
///
/// Both `name` and `description` are used as-is when set, a generic text
/// mentioning the channel is used otherwise.
#[derive(Clone, Debug, Default)]
pub(crate) struct StreamMetadata {
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) publisher: Option<Publisher>,
}

impl StreamMetadata {
    pub(crate) fn name_for(&self, channel: &str) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Twitch Stream - {channel}"))
    }

    pub(crate) fn description_for(&self, channel: &str) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("Live streaming content from {channel}"))
    }
}

/// Person behind the stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Publisher {
    pub(crate) name: String,
    pub(crate) url: String,
}
