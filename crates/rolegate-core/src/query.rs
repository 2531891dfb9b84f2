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

//! Permission queries over the role table.
//!
//! Role and permission identifiers arrive as free-form strings. Two flavours
//! are offered:
//!
//! * [`check_permission`] and [`get_user_permissions`] are total. An unknown
//!   identifier is reported through `tracing` at error level and the query
//!   falls back to `false` or an empty map.
//! * [`try_check_permission`] and [`try_get_user_permissions`] return an
//!   [`AccessError`] instead, leaving reporting to the caller.

use crate::errors::AccessError;
use crate::table::{RoleDefinition, RoleTable};
use crate::types::{Permission, PermissionMap};

fn resolve_role(role: &str) -> Result<&'static RoleDefinition, AccessError> {
    RoleTable::global()
        .lookup(role)
        .ok_or_else(|| AccessError::UnknownRole(role.to_string()))
}

/// Looks up the stored flag for `permission` on `role`.
///
/// # Returns
/// * `Ok(flag)` with the table value if both identifiers are known.
/// * `Err(AccessError::UnknownRole)` if the role is not in the table. The
///   role is checked first.
/// * `Err(AccessError::UnknownPermission)` if the permission is not one of
///   the nine known keys. Both `canViewLogs` and `view-logs` forms resolve.
pub fn try_check_permission(role: &str, permission: &str) -> Result<bool, AccessError> {
    let definition = resolve_role(role)?;
    let permission: Permission = permission.parse()?;
    Ok(definition.permissions.get(permission))
}

/// Returns every permission flag of `role`, or an error if the role is unknown.
pub fn try_get_user_permissions(role: &str) -> Result<PermissionMap, AccessError> {
    resolve_role(role).map(|definition| definition.permissions.to_map())
}

/// Whether `role` is granted `permission`.
///
/// Never fails: an unknown role or permission is logged and answered with `false`.
pub fn check_permission(role: &str, permission: &str) -> bool {
    match try_check_permission(role, permission) {
        Ok(granted) => granted,
        Err(err) => {
            report(&err);
            false
        }
    }
}

/// All permission flags of `role`.
///
/// Never fails: an unknown role is logged and answered with an empty map.
pub fn get_user_permissions(role: &str) -> PermissionMap {
    try_get_user_permissions(role).unwrap_or_else(|err| {
        report(&err);
        PermissionMap::new()
    })
}

/// Emits the error-level diagnostic used by the total queries.
///
/// The event carries a `role` or `permission` field with the identifier
/// that failed to resolve.
pub fn report(err: &AccessError) {
    match err {
        AccessError::UnknownRole(role) => {
            tracing::error!(role = role.as_str(), "{}", err);
        }
        AccessError::UnknownPermission(permission) => {
            tracing::error!(permission = permission.as_str(), "{}", err);
        }
    }
}
