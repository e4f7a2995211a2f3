//! First-run setup and launch of the target application.
//!
//! - [`InstallLayout`]: where the executable and config live
//! - [`BootstrapState`]: what exists on disk and which actions follow
//! - [`storage`]: the storage path prompt loop
//! - [`target_config`]: writing the chosen path into the config
//! - [`TargetApp`]: build / init / launch of the application
//! - [`Orchestrator`]: ties the above together

pub mod layout;
pub mod orchestrator;
pub mod state;
pub mod storage;
pub mod target_app;
pub mod target_config;

pub use layout::{executable_name, InstallLayout};
pub use orchestrator::{Orchestrator, SetupSummary};
pub use state::{BootstrapState, SetupAction, SetupState};
pub use storage::{acquire_storage_path, expand_home, StorageSelection};
pub use target_app::{CargoTargetApp, TargetApp};
pub use target_config::{rewrite_config_file, set_storage_path};
