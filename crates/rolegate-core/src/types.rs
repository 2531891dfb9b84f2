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

//! Role and permission identifiers, and the per-role permission set.

use crate::errors::AccessError;
use crate::table::RoleTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A user role.
///
/// The set is closed: every role has an entry in the [`RoleTable`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including user management and the admin panel.
    Admin,
    /// May edit and delete any record and update methodical data.
    Editor,
    /// May view all records and create new ones. New accounts start here.
    #[default]
    User,
}

impl Role {
    /// Every role, in table order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Editor, Role::User];

    /// The role identifier as used on the wire (`admin`, `editor`, `user`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::User => "user",
        }
    }

    /// Human-readable name from the role table.
    pub fn display_name(self) -> &'static str {
        RoleTable::global().get(self).display_name
    }

    /// The role's permission set.
    pub fn permissions(self) -> &'static PermissionSet {
        &RoleTable::global().get(self).permissions
    }

    /// Whether this role is granted `permission`.
    pub fn has(self, permission: Permission) -> bool {
        self.permissions().get(permission)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AccessError::UnknownRole(s.to_string()))
    }
}

/// A named capability.
///
/// Serialized as its wire key (`canViewLogs`); the slug form (`view-logs`)
/// is accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// View every record.
    #[serde(rename = "canViewAll", alias = "view-all")]
    ViewAll,
    /// Edit any record, including ones authored by others.
    #[serde(rename = "canEditAll", alias = "edit-all")]
    EditAll,
    /// Delete any record, including ones authored by others.
    #[serde(rename = "canDeleteAll", alias = "delete-all")]
    DeleteAll,
    /// Create new records.
    #[serde(rename = "canCreate", alias = "create")]
    Create,
    /// Read the audit log.
    #[serde(rename = "canViewLogs", alias = "view-logs")]
    ViewLogs,
    /// Edit the shared search filters.
    #[serde(rename = "canEditFilters", alias = "edit-filters")]
    EditFilters,
    /// Update methodical data.
    #[serde(rename = "canUpdateMethodicalData", alias = "update-methodical-data")]
    UpdateMethodicalData,
    /// Create, change and remove user accounts.
    #[serde(rename = "canManageUsers", alias = "manage-users")]
    ManageUsers,
    /// Open the administration panel.
    #[serde(rename = "canAccessAdminPanel", alias = "access-admin-panel")]
    AccessAdminPanel,
}

impl Permission {
    /// Every permission, in table order.
    pub const ALL: [Permission; 9] = [
        Permission::ViewAll,
        Permission::EditAll,
        Permission::DeleteAll,
        Permission::Create,
        Permission::ViewLogs,
        Permission::EditFilters,
        Permission::UpdateMethodicalData,
        Permission::ManageUsers,
        Permission::AccessAdminPanel,
    ];

    /// Wire key, e.g. `canViewLogs`.
    pub const fn key(self) -> &'static str {
        match self {
            Permission::ViewAll => "canViewAll",
            Permission::EditAll => "canEditAll",
            Permission::DeleteAll => "canDeleteAll",
            Permission::Create => "canCreate",
            Permission::ViewLogs => "canViewLogs",
            Permission::EditFilters => "canEditFilters",
            Permission::UpdateMethodicalData => "canUpdateMethodicalData",
            Permission::ManageUsers => "canManageUsers",
            Permission::AccessAdminPanel => "canAccessAdminPanel",
        }
    }

    /// Kebab-case slug, e.g. `view-logs`.
    pub const fn slug(self) -> &'static str {
        match self {
            Permission::ViewAll => "view-all",
            Permission::EditAll => "edit-all",
            Permission::DeleteAll => "delete-all",
            Permission::Create => "create",
            Permission::ViewLogs => "view-logs",
            Permission::EditFilters => "edit-filters",
            Permission::UpdateMethodicalData => "update-methodical-data",
            Permission::ManageUsers => "manage-users",
            Permission::AccessAdminPanel => "access-admin-panel",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|permission| permission.key() == s || permission.slug() == s)
            .ok_or_else(|| AccessError::UnknownPermission(s.to_string()))
    }
}

/// Permission flags keyed by permission, as returned by the query API.
///
/// Empty when the role was not recognized, otherwise holds all nine keys.
pub type PermissionMap = BTreeMap<Permission, bool>;

/// The complete set of permission flags for one role.
///
/// One field per [`Permission`], so a set can never be partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    /// See [`Permission::ViewAll`].
    pub can_view_all: bool,
    /// See [`Permission::EditAll`].
    pub can_edit_all: bool,
    /// See [`Permission::DeleteAll`].
    pub can_delete_all: bool,
    /// See [`Permission::Create`].
    pub can_create: bool,
    /// See [`Permission::ViewLogs`].
    pub can_view_logs: bool,
    /// See [`Permission::EditFilters`].
    pub can_edit_filters: bool,
    /// See [`Permission::UpdateMethodicalData`].
    pub can_update_methodical_data: bool,
    /// See [`Permission::ManageUsers`].
    pub can_manage_users: bool,
    /// See [`Permission::AccessAdminPanel`].
    pub can_access_admin_panel: bool,
}

impl PermissionSet {
    /// The stored flag for `permission`.
    pub const fn get(&self, permission: Permission) -> bool {
        match permission {
            Permission::ViewAll => self.can_view_all,
            Permission::EditAll => self.can_edit_all,
            Permission::DeleteAll => self.can_delete_all,
            Permission::Create => self.can_create,
            Permission::ViewLogs => self.can_view_logs,
            Permission::EditFilters => self.can_edit_filters,
            Permission::UpdateMethodicalData => self.can_update_methodical_data,
            Permission::ManageUsers => self.can_manage_users,
            Permission::AccessAdminPanel => self.can_access_admin_panel,
        }
    }

    /// All permissions with their flags, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Permission, bool)> + '_ {
        Permission::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Only the granted permissions.
    pub fn granted(&self) -> impl Iterator<Item = Permission> + '_ {
        self.iter().filter_map(|(p, granted)| granted.then_some(p))
    }

    /// Copies the set into a [`PermissionMap`].
    pub fn to_map(&self) -> PermissionMap {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
            assert_eq!(role.to_string(), role.as_str());
        }
        assert_eq!(
            "Admin".parse::<Role>(),
            Err(AccessError::UnknownRole("Admin".to_string()))
        );
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_default_role_is_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_permission_parses_key_and_slug() {
        for permission in Permission::ALL {
            assert_eq!(permission.key().parse::<Permission>(), Ok(permission));
            assert_eq!(permission.slug().parse::<Permission>(), Ok(permission));
        }
        assert_eq!(
            "canFly".parse::<Permission>(),
            Err(AccessError::UnknownPermission("canFly".to_string()))
        );
    }

    #[test]
    fn test_permission_serialization() {
        let serialized = serde_json::to_string(&Permission::UpdateMethodicalData).unwrap();
        assert_eq!(serialized, "\"canUpdateMethodicalData\"");

        let from_slug: Permission = serde_json::from_str("\"view-logs\"").unwrap();
        assert_eq!(from_slug, Permission::ViewLogs);

        let role: Role = serde_json::from_str("\"editor\"").unwrap();
        assert_eq!(role, Role::Editor);
    }

    #[test]
    fn test_permission_set_field_names_match_keys() {
        let value = serde_json::to_value(Role::Admin.permissions()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Permission::ALL.len());
        for permission in Permission::ALL {
            assert_eq!(object.get(permission.key()), Some(&serde_json::json!(true)));
        }
    }

    #[test]
    fn test_permission_set_accessors() {
        let set = Role::Editor.permissions();
        assert_eq!(set.iter().count(), 9);
        assert_eq!(
            set.granted().collect::<Vec<_>>(),
            vec![
                Permission::ViewAll,
                Permission::EditAll,
                Permission::DeleteAll,
                Permission::Create,
                Permission::UpdateMethodicalData,
            ]
        );

        let map = set.to_map();
        assert_eq!(map.len(), 9);
        assert_eq!(map[&Permission::ViewLogs], false);
        assert_eq!(map[&Permission::UpdateMethodicalData], true);
    }

    #[test]
    fn test_permission_map_serializes_with_wire_keys() {
        let json = serde_json::to_value(Role::User.permissions().to_map()).unwrap();
        assert_eq!(json["canViewAll"], true);
        assert_eq!(json["canEditAll"], false);
        assert_eq!(json.as_object().unwrap().len(), 9);
    }
}
