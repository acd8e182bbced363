//! User-facing helpers over the [`User`] entity.

use crate::domain::model::{Role, User};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_USER_LABEL: &str = "未知用户";
pub const USER_LABEL_PREFIX: &str = "用户";

/// Labels used when a user has no name or email, or no user is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub unknown_user_label: String,
    pub user_label_prefix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unknown_user_label: UNKNOWN_USER_LABEL.to_string(),
            user_label_prefix: USER_LABEL_PREFIX.to_string(),
        }
    }
}

/// Name, then email, then `用户{id}`; `未知用户` when there is no user.
pub fn get_user_display_name(user: Option<&User>) -> String {
    get_user_display_name_with(user, &DisplayConfig::default())
}

pub fn get_user_display_name_with(user: Option<&User>, labels: &DisplayConfig) -> String {
    let Some(user) = user else {
        return labels.unknown_user_label.clone();
    };
    if !user.name.is_empty() {
        user.name.clone()
    } else if !user.email.is_empty() {
        user.email.clone()
    } else {
        format!("{}{}", labels.user_label_prefix, user.id)
    }
}

pub fn is_admin(user: Option<&User>) -> bool {
    user.is_some_and(|user| user.role == Role::Admin)
}
