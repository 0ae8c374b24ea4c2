//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod http_workspace;
pub mod runtime;
pub mod settings;
pub mod tool_channel;

pub use http_workspace::HttpWorkspaceClient;
pub use runtime::TokioExecutor;
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    load_settings_from, SettingsError,
};
pub use tool_channel::WatchToolChannel;
