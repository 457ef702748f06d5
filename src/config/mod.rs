//! Configuration module.
//!
//! - `loader`: TOML file discovery, merge, env and CLI overrides
//! - `keybindings`: key event to [`crate::model::KeyAction`] mapping

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ConfigError, ConfigFile, ResolvedConfig,
};
