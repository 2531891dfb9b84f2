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

#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Static role-based access control for rolegate.
//!
//! This crate provides:
//! - The closed sets of roles and permissions
//! - The immutable role table
//! - Total permission queries that log and fall back on unknown input
//! - Tagged-result variants of the same queries
//! - Record ownership checks built on the table

pub mod errors;
pub mod query;
pub mod records;
pub mod table;
pub mod types;

pub use errors::AccessError;
pub use query::{
    check_permission, get_user_permissions, report, try_check_permission,
    try_get_user_permissions,
};
pub use records::{check_record_access, RecordAction};
pub use table::{RoleDefinition, RoleTable};
pub use types::{Permission, PermissionMap, PermissionSet, Role};
