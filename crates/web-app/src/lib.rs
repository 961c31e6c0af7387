#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

pub mod editor;
pub mod log;
mod notification;
mod service;
mod settings;

pub use editor::{Command, Editor, Msg, execute};
pub use notification::{Kind as NotificationKind, Notification};
pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService};
