use crate::controller::EmbedHost;

/// Defers the player's initialization until the embed's container is close to the
/// viewport.
///
/// The gate opens at most once: after the first intersection the observation is
/// stopped and scrolling away then back has no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum VisibilityGate {
    /// The container is not observed yet.
    Unobserved,

    /// The container is observed, waiting for it to intersect.
    Observing,

    /// The container did intersect, initialization was triggered.
    Triggered,
}

impl VisibilityGate {
    pub(crate) fn new() -> Self {
        VisibilityGate::Unobserved
    }

    pub(crate) fn has_triggered(&self) -> bool {
        *self == VisibilityGate::Triggered
    }

    /// Start observing the container. Does nothing if it is already observed or if the
    /// gate already triggered.
    pub(crate) fn arm(&mut self, host: &mut impl EmbedHost, root_margin: u32) {
        if *self == VisibilityGate::Unobserved {
            host.observe_visibility(root_margin);
            *self = VisibilityGate::Observing;
        }
    }

    /// To call on each intersection entry. Returns `true` only for the entry which
    /// should trigger initialization.
    pub(crate) fn on_intersection(
        &mut self,
        host: &mut impl EmbedHost,
        is_intersecting: bool,
    ) -> bool {
        if *self != VisibilityGate::Observing || !is_intersecting {
            return false;
        }
        host.stop_observing_visibility();
        *self = VisibilityGate::Triggered;
        true
    }

    /// Stop observing the container if it still is.
    ///
    /// A disarmed gate goes back to `Unobserved`, even if it already triggered, so the
    /// next `arm` waits again for the container to be visible.
    pub(crate) fn disarm(&mut self, host: &mut impl EmbedHost) {
        if *self == VisibilityGate::Observing {
            host.stop_observing_visibility();
        }
        *self = VisibilityGate::Unobserved;
    }
}
