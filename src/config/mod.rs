mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, CONFIG_FILE_NAME};
pub use model::{
    ExtensionsConfig, GateConfig, HygieneConfig, LayoutConfig, LimitsConfig, NamingConfig,
    TempConfig, WalkConfig,
};
