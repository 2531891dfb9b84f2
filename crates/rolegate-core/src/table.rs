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

//! The static role table.
//!
//! The table is a compile-time constant. It holds one [`RoleDefinition`]
//! per [`Role`], in the order of [`Role::ALL`], and is never mutated.

use crate::types::{PermissionSet, Role};
use serde::Serialize;

/// A role together with its display name and permission set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleDefinition {
    /// The role this entry describes.
    pub role: Role,
    /// Human-readable role name.
    #[serde(rename = "name")]
    pub display_name: &'static str,
    /// The role's permission flags.
    pub permissions: PermissionSet,
}

/// Read-only lookup over the role definitions.
#[derive(Debug)]
pub struct RoleTable {
    roles: [RoleDefinition; 3],
}

static ROLE_TABLE: RoleTable = RoleTable {
    roles: [
        RoleDefinition {
            role: Role::Admin,
            display_name: "Администратор",
            permissions: PermissionSet {
                can_view_all: true,
                can_edit_all: true,
                can_delete_all: true,
                can_create: true,
                can_view_logs: true,
                can_edit_filters: true,
                can_update_methodical_data: true,
                can_manage_users: true,
                can_access_admin_panel: true,
            },
        },
        RoleDefinition {
            role: Role::Editor,
            display_name: "Редактор",
            permissions: PermissionSet {
                can_view_all: true,
                can_edit_all: true,
                can_delete_all: true,
                can_create: true,
                can_view_logs: false,
                can_edit_filters: false,
                can_update_methodical_data: true,
                can_manage_users: false,
                can_access_admin_panel: false,
            },
        },
        RoleDefinition {
            role: Role::User,
            display_name: "Пользователь",
            permissions: PermissionSet {
                can_view_all: true,
                can_edit_all: false,
                can_delete_all: false,
                can_create: true,
                can_view_logs: false,
                can_edit_filters: false,
                can_update_methodical_data: false,
                can_manage_users: false,
                can_access_admin_panel: false,
            },
        },
    ],
};

impl RoleTable {
    /// The process-wide role table.
    pub fn global() -> &'static RoleTable {
        &ROLE_TABLE
    }

    /// Definition for a known role.
    pub fn get(&self, role: Role) -> &RoleDefinition {
        // Entries are stored in `Role::ALL` order.
        let index = match role {
            Role::Admin => 0,
            Role::Editor => 1,
            Role::User => 2,
        };
        &self.roles[index]
    }

    /// Definition for a free-form role identifier, or `None` if it is not a known role.
    pub fn lookup(&self, role: &str) -> Option<&RoleDefinition> {
        self.roles.iter().find(|def| def.role.as_str() == role)
    }

    /// All definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleDefinition> {
        self.roles.iter()
    }

    /// Number of roles in the table.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Always `false`; present alongside [`RoleTable::len`].
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
