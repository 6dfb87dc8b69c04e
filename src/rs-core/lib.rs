use wasm_bindgen::prelude::*;

mod bindings;
mod config;
mod controller;
mod embed;
mod script_loader;
mod utils;
mod view;
mod visibility;

pub use bindings::{
    CreatePlayerResult, DestroyPlayerResult, LogLevel, ScriptStatus, TimerReason,
};
pub use controller::LoadState;
pub use embed::TwitchEmbed;
pub use utils::logger::{set_log_level, Logger, LoggerLevel};
pub use view::FailureReason;
