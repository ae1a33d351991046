//! Application constants and configuration defaults
//!
//! Centralized location for names and limits shared across modules

/// The plan tool as registered with the host
pub mod tool {
    /// Tool name (id) in the host's tool namespace
    pub const NAME: &str = "todowrite";

    /// Short display label
    pub const LABEL: &str = "Plan";

    /// Tool description for the model
    pub const DESCRIPTION: &str = "Track task progress with steps. Each step has status: pending, in_progress, or completed. Keep exactly one step in_progress at a time.";
}

/// Slash commands
pub mod command {
    /// Status command name
    pub const PLAN: &str = "plan";

    pub const PLAN_DESCRIPTION: &str = "Show current plan/progress";
}

/// Plan views
pub mod view {
    /// Steps shown by the detailed view when not expanded
    pub const COLLAPSED_STEP_LIMIT: usize = 6;
}

/// Config and log locations
pub mod paths {
    /// Config directory name under the home directory
    pub const CONFIG_DIR_NAME: &str = ".plantrack";

    /// Environment variable overriding the config directory
    pub const HOME_ENV_VAR: &str = "PLANTRACK_HOME";

    pub const CONFIG_FILE_NAME: &str = "config.toml";

    pub const LOGS_DIR_NAME: &str = "logs";

    pub const LOG_FILE_NAME: &str = "plantrack.log";
}
