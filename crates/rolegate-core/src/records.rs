// Copyright 2024 Helix Platform
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ownership-aware checks for actions on individual records.

use crate::query::{report, try_check_permission};
use serde::Serialize;

/// Author assumed for records that carry none.
pub const DEFAULT_AUTHOR: &str = "system";

/// An action on an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordAction {
    /// Change the record.
    Edit,
    /// Remove the record.
    Delete,
}

impl RecordAction {
    fn permission_key(self) -> &'static str {
        match self {
            RecordAction::Edit => "canEditAll",
            RecordAction::Delete => "canDeleteAll",
        }
    }
}

/// Whether `actor`, holding `role`, may perform `action` on a record written by `author`.
///
/// Authors may always act on their own records. Anyone else needs
/// `canEditAll` or `canDeleteAll` respectively. An unknown role is logged
/// and denied, even for the record's author.
pub fn check_record_access(
    role: &str,
    action: RecordAction,
    actor: &str,
    author: Option<&str>,
) -> bool {
    match try_check_permission(role, action.permission_key()) {
        Ok(granted) => granted || author.unwrap_or(DEFAULT_AUTHOR) == actor,
        Err(err) => {
            report(&err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_may_edit_own_record() {
        assert!(check_record_access("user", RecordAction::Edit, "alice", Some("alice")));
        assert!(check_record_access("user", RecordAction::Delete, "alice", Some("alice")));
    }

    #[test]
    fn test_user_may_not_touch_others_records() {
        assert!(!check_record_access("user", RecordAction::Edit, "alice", Some("bob")));
        assert!(!check_record_access("user", RecordAction::Delete, "alice", Some("bob")));
    }

    #[test]
    fn test_editor_and_admin_may_touch_any_record() {
        for role in ["admin", "editor"] {
            assert!(check_record_access(role, RecordAction::Edit, "alice", Some("bob")));
            assert!(check_record_access(role, RecordAction::Delete, "alice", None));
        }
    }

    #[test]
    fn test_missing_author_defaults_to_system() {
        assert!(!check_record_access("user", RecordAction::Edit, "alice", None));
        assert!(check_record_access("user", RecordAction::Edit, DEFAULT_AUTHOR, None));
    }

    #[test]
    fn test_unknown_role_is_denied_even_for_author() {
        assert!(!check_record_access("guest", RecordAction::Edit, "alice", Some("alice")));
    }

    #[test]
    fn test_action_serialization() {
        assert_eq!(serde_json::to_string(&RecordAction::Edit).unwrap(), "\"edit\"");
        assert_eq!(serde_json::to_string(&RecordAction::Delete).unwrap(), "\"delete\"");
    }
}
