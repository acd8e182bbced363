pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::HelperConfig;
pub use core::business::{get_user_display_name, get_user_display_name_with, is_admin};
pub use core::collections::{
    compact, compact_values, deep_clone, deep_clone_json, first, last, unique, unique_by,
};
pub use core::formatting::{format_date, truncate, truncate_with, DateInput};
pub use core::guards::{
    as_number, as_string, is_nil, is_not_nil, is_number, is_number_f64, is_string,
    is_success_response, Nil,
};
pub use core::objects::{omit, omit_fields, pick, pick_fields};
pub use core::timing::{debounce, delay, Debouncer};
pub use domain::model::{ApiResponse, Id, PaginatedData, Role, Status, User, UserBasicInfo, UserFormData};
pub use utils::error::{HelperError, Result};
