use crate::bindings::ScriptStatus;
use crate::controller::{EmbedHost, ScriptRequest};
use crate::Logger;

/// Makes sure the player library is loaded on the page, requesting it at most once
/// whatever the number of embeds asking for it.
///
/// The script element, identified by a reserved id, is page-wide: it is created by
/// the first embed needing it and never removed afterwards. The document itself is
/// the source of truth, each `ScriptLoader` only tracks whether its own embed is
/// currently waiting on that element.
pub(crate) struct ScriptLoader {
    script_id: String,
    script_url: String,
    wait: ScriptWait,
}

/// Whether the embed is waiting for events on the shared script element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScriptWait {
    /// No listener registered.
    Idle,

    /// Listeners are registered on the script element.
    Listening,
}

/// Outcome of a `ScriptLoader::ensure` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScriptReadiness {
    /// The player library can be used right away.
    Ready,

    /// The library is being loaded, either `on_loaded` or `on_failed` will be
    /// called once it is known.
    Pending,

    /// The script element already failed to load. It is not requested again.
    Failed,
}

impl ScriptLoader {
    pub(crate) fn new(script_id: &str, script_url: &str) -> Self {
        Self {
            script_id: script_id.to_string(),
            script_url: script_url.to_string(),
            wait: ScriptWait::Idle,
        }
    }

    pub(crate) fn script_url(&self) -> &str {
        &self.script_url
    }

    /// Returns `true` if listeners are currently registered on the script element.
    pub(crate) fn is_waiting(&self) -> bool {
        self.wait == ScriptWait::Listening
    }

    /// Check the shared script element and either report the library as ready, or
    /// make sure we will be notified once it is.
    pub(crate) fn ensure(&mut self, host: &mut impl EmbedHost) -> ScriptReadiness {
        if self.is_waiting() {
            return ScriptReadiness::Pending;
        }
        match host.script_status(&self.script_id) {
            ScriptStatus::Available => ScriptReadiness::Ready,
            ScriptStatus::Failed => {
                Logger::warn("Twitch script previously failed to load");
                ScriptReadiness::Failed
            }
            ScriptStatus::Pending => {
                Logger::debug("Twitch script already requested, waiting for it");
                host.listen_script(&self.script_id, false);
                self.wait = ScriptWait::Listening;
                ScriptReadiness::Pending
            }
            ScriptStatus::Absent => {
                Logger::lazy_info(&|| format!("Injecting Twitch script: {}", self.script_url));
                host.inject_script(&ScriptRequest {
                    id: &self.script_id,
                    url: &self.script_url,
                    is_async: true,
                    is_defer: true,
                    cross_origin: "anonymous",
                });
                host.listen_script(&self.script_id, true);
                self.wait = ScriptWait::Listening;
                ScriptReadiness::Pending
            }
        }
    }

    /// To call when the script element's "load" event is received.
    ///
    /// Returns `false` if we were not waiting for it, in which case the event should
    /// be ignored.
    pub(crate) fn on_loaded(&mut self, host: &mut impl EmbedHost) -> bool {
        self.stop_waiting(host)
    }

    /// To call when the script element's "error" event is received.
    ///
    /// Returns `false` if we were not waiting for it, in which case the event should
    /// be ignored.
    pub(crate) fn on_failed(&mut self, host: &mut impl EmbedHost) -> bool {
        self.stop_waiting(host)
    }

    /// Remove the listeners of this embed, if any. The script element is left as is,
    /// other embeds may rely on it.
    pub(crate) fn detach(&mut self, host: &mut impl EmbedHost) {
        self.stop_waiting(host);
    }

    fn stop_waiting(&mut self, host: &mut impl EmbedHost) -> bool {
        if self.wait == ScriptWait::Idle {
            return false;
        }
        host.unlisten_script(&self.script_id);
        self.wait = ScriptWait::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::test_utils::FakePage;

    const ID: &str = "twitch-embed-script";
    const URL: &str = "https://player.twitch.tv/js/embed/v1.js";

    #[test]
    fn test_absent_script_is_injected_once() {
        let page = FakePage::new();
        let mut host_a = page.host(1);
        let mut host_b = page.host(2);
        let mut loader_a = ScriptLoader::new(ID, URL);
        let mut loader_b = ScriptLoader::new(ID, URL);

        assert_eq!(loader_a.ensure(&mut host_a), ScriptReadiness::Pending);
        assert_eq!(loader_b.ensure(&mut host_b), ScriptReadiness::Pending);
        assert_eq!(page.script_count(ID), 1);
        let injected = page.injected_scripts();
        assert_eq!(injected.len(), 1);
        assert_eq!(injected[0].id, ID);
        assert_eq!(injected[0].url, URL);
        assert!(injected[0].is_async && injected[0].is_defer);
        assert_eq!(injected[0].cross_origin, "anonymous");

        // The embed creating the element also listens for errors, the other one only
        // for its load.
        assert_eq!(page.script_listeners(1), Some(true));
        assert_eq!(page.script_listeners(2), Some(false));
    }

    #[test]
    fn test_available_script_is_ready_synchronously() {
        let page = FakePage::new();
        page.add_loaded_script(ID);
        let mut host = page.host(1);
        let mut loader = ScriptLoader::new(ID, URL);
        assert_eq!(loader.ensure(&mut host), ScriptReadiness::Ready);
        assert!(!loader.is_waiting());
        assert_eq!(page.script_listeners(1), None);
        assert_eq!(page.script_count(ID), 1);
    }

    #[test]
    fn test_ensure_while_waiting_does_not_listen_twice() {
        let page = FakePage::new();
        let mut host = page.host(1);
        let mut loader = ScriptLoader::new(ID, URL);
        loader.ensure(&mut host);
        assert_eq!(loader.ensure(&mut host), ScriptReadiness::Pending);
        assert_eq!(page.calls(1).iter().filter(|c| c.starts_with("listen_script")).count(), 1);
    }

    #[test]
    fn test_detach_removes_listeners_but_not_the_script() {
        let page = FakePage::new();
        let mut host = page.host(1);
        let mut loader = ScriptLoader::new(ID, URL);
        loader.ensure(&mut host);
        loader.detach(&mut host);
        assert_eq!(page.script_listeners(1), None);
        assert_eq!(page.script_count(ID), 1);
        assert!(!loader.on_loaded(&mut host));
    }

    #[test]
    fn test_failed_script_is_not_waited_on() {
        let page = FakePage::new();
        let mut host = page.host(1);
        let mut loader = ScriptLoader::new(ID, URL);
        loader.ensure(&mut host);
        assert_eq!(page.fail_script_load(), vec![1]);
        assert!(loader.on_failed(&mut host));

        let mut other_host = page.host(2);
        let mut other = ScriptLoader::new(ID, URL);
        assert_eq!(loader.ensure(&mut host), ScriptReadiness::Failed);
        assert_eq!(other.ensure(&mut other_host), ScriptReadiness::Failed);
        assert!(!loader.is_waiting() && !other.is_waiting());
        assert_eq!(page.script_listeners(1), None);
        assert_eq!(page.script_listeners(2), None);
        assert_eq!(page.script_count(ID), 1);
    }
}
