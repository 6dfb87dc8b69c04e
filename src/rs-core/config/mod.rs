use thiserror::Error;

mod configuration;

pub(crate) use configuration::{EmbedConfiguration, Publisher, StreamMetadata};

/// Inputs given by the page when creating a `TwitchEmbed`.
///
/// Those stay the same for the whole lifetime of the embed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EmbedConfig {
    /// Login of the Twitch channel to play.
    channel: String,

    /// Domains allowed to embed the player, as required by Twitch's `parent` parameter.
    parent_domains: Vec<String>,
}

impl EmbedConfig {
    /// Validate and build a new `EmbedConfig`.
    pub(crate) fn new(
        channel: impl Into<String>,
        parent_domains: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let channel = channel.into();
        if channel.is_empty() {
            return Err(ConfigError::EmptyChannel);
        }
        if !channel.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::InvalidChannel { channel });
        }
        if parent_domains.is_empty() {
            return Err(ConfigError::NoParentDomain);
        }
        if parent_domains.iter().any(|d| d.trim().is_empty()) {
            return Err(ConfigError::EmptyParentDomain);
        }
        Ok(Self {
            channel,
            parent_domains,
        })
    }

    pub(crate) fn channel(&self) -> &str {
        &self.channel
    }

    pub(crate) fn parent_domains(&self) -> &[String] {
        &self.parent_domains
    }

    /// Page of the channel on Twitch itself.
    pub(crate) fn channel_url(&self) -> String {
        format!("https://twitch.tv/{}", self.channel)
    }

    pub(crate) fn embed_url(&self) -> String {
        format!("https://player.twitch.tv/?channel={}", self.channel)
    }

    pub(crate) fn thumbnail_url(&self) -> String {
        format!(
            "https://static-cdn.jtvnw.net/previews-ttv/live_user_{}-1920x1080.jpg",
            self.channel
        )
    }
}

/// Error that may be returned when creating an `EmbedConfig`.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("No channel was given to the Twitch embed.")]
    EmptyChannel,
    #[error("`{channel}` is not a valid Twitch channel name.")]
    InvalidChannel { channel: String },
    #[error("At least one parent domain is needed to embed a Twitch player.")]
    NoParentDomain,
    #[error("An empty parent domain was given to the Twitch embed.")]
    EmptyParentDomain,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parents() -> Vec<String> {
        vec!["example.com".to_string()]
    }

    #[test]
    fn test_derived_urls() {
        let config = EmbedConfig::new("examplechannel", parents()).unwrap();
        assert_eq!(config.channel_url(), "https://twitch.tv/examplechannel");
        assert_eq!(
            config.embed_url(),
            "https://player.twitch.tv/?channel=examplechannel"
        );
        assert_eq!(
            config.thumbnail_url(),
            "https://static-cdn.jtvnw.net/previews-ttv/live_user_examplechannel-1920x1080.jpg"
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            EmbedConfig::new("", parents()),
            Err(ConfigError::EmptyChannel)
        );
        assert_eq!(
            EmbedConfig::new("a\"><script>", parents()),
            Err(ConfigError::InvalidChannel {
                channel: "a\"><script>".to_string()
            })
        );
        assert_eq!(
            EmbedConfig::new("chan", vec![]),
            Err(ConfigError::NoParentDomain)
        );
        assert_eq!(
            EmbedConfig::new("chan", vec!["example.com".to_string(), " ".to_string()]),
            Err(ConfigError::EmptyParentDomain)
        );
        assert!(EmbedConfig::new("some_channel42", parents()).is_ok());
    }
}
