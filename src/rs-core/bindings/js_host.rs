use super::js_functions::{
    jsClearContainer, jsClearTimer, jsCreatePlayer, jsDestroyPlayer, jsGetScriptStatus,
    jsInjectScript, jsListenScript, jsObserveVisibility, jsRender, jsStopObservingVisibility,
    jsTimer, jsUnlistenScript, EmbedId, JsResult, PlayerHandle, ScriptStatus, TimerId,
    TimerReason,
};
use crate::controller::{EmbedHost, PlayerOptions, ScriptRequest};
use crate::view::EmbedView;

/// `EmbedHost` relying on the JavaScript functions exposed to the WebAssembly module.
pub(crate) struct JsHost {
    embed_id: EmbedId,
}

impl JsHost {
    pub(crate) fn new(embed_id: EmbedId) -> Self {
        Self { embed_id }
    }
}

impl EmbedHost for JsHost {
    fn script_status(&self, script_id: &str) -> ScriptStatus {
        jsGetScriptStatus(script_id)
    }

    fn inject_script(&mut self, request: &ScriptRequest<'_>) {
        jsInjectScript(
            self.embed_id,
            request.id,
            request.url,
            request.is_async,
            request.is_defer,
            request.cross_origin,
        );
    }

    fn listen_script(&mut self, script_id: &str, with_error: bool) {
        jsListenScript(self.embed_id, script_id, with_error);
    }

    fn unlisten_script(&mut self, script_id: &str) {
        jsUnlistenScript(self.embed_id, script_id);
    }

    fn observe_visibility(&mut self, root_margin: u32) {
        jsObserveVisibility(self.embed_id, root_margin);
    }

    fn stop_observing_visibility(&mut self) {
        jsStopObservingVisibility(self.embed_id);
    }

    fn clear_container(&mut self) {
        jsClearContainer(self.embed_id);
    }

    fn create_player(&mut self, options: &PlayerOptions) -> Result<PlayerHandle, Option<String>> {
        jsCreatePlayer(
            self.embed_id,
            &options.channel,
            options.parent.clone(),
            options.width,
            options.height,
            options.autoplay,
            options.muted,
        )
        .result()
    }

    fn destroy_player(&mut self, handle: PlayerHandle) -> Result<(), Option<String>> {
        jsDestroyPlayer(self.embed_id, handle).result()
    }

    fn start_timer(&mut self, duration: f64, reason: TimerReason) -> TimerId {
        jsTimer(self.embed_id, duration, reason)
    }

    fn clear_timer(&mut self, id: TimerId) {
        jsClearTimer(self.embed_id, id);
    }

    fn render(&mut self, view: &EmbedView) {
        jsRender(
            self.embed_id,
            view.show_container,
            &view.container_label,
            view.overlay_html.clone(),
            view.structured_data.clone(),
            view.failure_reason,
        );
    }
}
