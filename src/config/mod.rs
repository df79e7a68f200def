mod r#impl;
mod structs;

pub use r#impl::{DEFAULT_CONFIG_PATH, ENV_PREFIX, get_config, init_config};
pub use structs::*;
