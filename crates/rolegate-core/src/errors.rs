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

//! Error types for role and permission lookups

use thiserror::Error;

/// Errors that can occur while resolving a role or permission identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The role identifier is not one of the known roles
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// The permission identifier is not one of the known permissions
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),
}

impl AccessError {
    /// The identifier that failed to resolve.
    pub fn identifier(&self) -> &str {
        match self {
            AccessError::UnknownRole(id) | AccessError::UnknownPermission(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let role = AccessError::UnknownRole("guest".to_string());
        assert_eq!(role.to_string(), "Unknown role: guest");
        assert_eq!(role.identifier(), "guest");

        let permission = AccessError::UnknownPermission("canFly".to_string());
        assert_eq!(permission.to_string(), "Unknown permission: canFly");
        assert_eq!(permission.identifier(), "canFly");
    }
}
