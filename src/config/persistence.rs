//! File persistence configuration

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// Where the export buttons write their files
pub struct ExportConfig {
    pub directory: &'static str,
    pub filename_prefix: &'static str,
    pub timestamp_format: &'static str,
}

pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
    pub export: ExportConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
    export: ExportConfig {
        directory: "exports",
        filename_prefix: "tradepro",
        timestamp_format: "%Y%m%d_%H%M%S",
    },
};
