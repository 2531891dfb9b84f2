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

//! `rolegate` — query the static role table from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use rolegate_core::{
    check_permission, get_user_permissions, report, try_check_permission,
    try_get_user_permissions, PermissionMap, RoleTable,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Inspect roles and check permissions.
#[derive(Parser, Debug)]
#[command(name = "rolegate", about = "Query the static role table", version)]
struct Args {
    /// Output format
    #[arg(
        long,
        value_enum,
        global = true,
        env = "ROLEGATE_FORMAT",
        default_value_t = OutputFormat::Text
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// List every role with its display name
    Roles,
    /// Print the permission set of a role
    Permissions {
        /// Role identifier (admin, editor, user)
        role: String,
    },
    /// Check a single permission; exits 0 if granted, 1 if denied, 2 if unknown
    Check {
        /// Role identifier (admin, editor, user)
        role: String,
        /// Permission key (canViewLogs) or slug (view-logs)
        permission: String,
    },
    /// Print every permission set and a few sample checks
    Demo,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// The command ran; for `check`, the permission is granted.
    Success,
    /// `check` found the permission denied.
    Denied,
    /// The role or permission is not in the table.
    Unknown,
}

impl Outcome {
    fn code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Denied => 1,
            Outcome::Unknown => 2,
        }
    }
}

#[derive(Serialize)]
struct RoleSummary<'a> {
    role: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    role: &'a str,
    permission: &'a str,
    granted: bool,
}

#[derive(Serialize)]
struct DemoReport<'a> {
    roles: BTreeMap<&'a str, PermissionMap>,
    checks: Vec<CheckReport<'a>>,
}

/// The sample checks printed by `demo`.
const DEMO_CHECKS: [(&str, &str, &str); 4] = [
    ("Admin can view logs", "admin", "canViewLogs"),
    ("Editor can view logs", "editor", "canViewLogs"),
    ("User can edit all records", "user", "canEditAll"),
    ("Editor can update methodical data", "editor", "canUpdateMethodicalData"),
];

fn render_permissions(
    permissions: &PermissionMap,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(permissions),
        OutputFormat::Text => {
            let mut out = String::new();
            for (permission, granted) in permissions {
                let _ = writeln!(out, "  {}: {}", permission, granted);
            }
            Ok(out)
        }
    }
}

fn render_roles(format: OutputFormat) -> Result<String, serde_json::Error> {
    let table = RoleTable::global();
    match format {
        OutputFormat::Json => {
            let summaries: Vec<_> = table
                .iter()
                .map(|def| RoleSummary {
                    role: def.role.as_str(),
                    name: def.display_name,
                })
                .collect();
            serde_json::to_string_pretty(&summaries)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for def in table.iter() {
                let _ = writeln!(out, "{}\t{}", def.role, def.display_name);
            }
            Ok(out)
        }
    }
}

fn run_permissions(
    role: &str,
    format: OutputFormat,
) -> Result<(String, Outcome), serde_json::Error> {
    match try_get_user_permissions(role) {
        Ok(permissions) => Ok((render_permissions(&permissions, format)?, Outcome::Success)),
        Err(err) => {
            report(&err);
            Ok((render_permissions(&PermissionMap::new(), format)?, Outcome::Unknown))
        }
    }
}

fn run_check(
    role: &str,
    permission: &str,
    format: OutputFormat,
) -> Result<(String, Outcome), serde_json::Error> {
    let (granted, outcome) = match try_check_permission(role, permission) {
        Ok(true) => (true, Outcome::Success),
        Ok(false) => (false, Outcome::Denied),
        Err(err) => {
            report(&err);
            (false, Outcome::Unknown)
        }
    };
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&CheckReport {
            role,
            permission,
            granted,
        })?,
        OutputFormat::Text => granted.to_string(),
    };
    Ok((out, outcome))
}

fn render_demo(format: OutputFormat) -> Result<String, serde_json::Error> {
    let table = RoleTable::global();
    if format == OutputFormat::Json {
        let document = DemoReport {
            roles: table
                .iter()
                .map(|def| (def.role.as_str(), get_user_permissions(def.role.as_str())))
                .collect(),
            checks: DEMO_CHECKS
                .iter()
                .map(|&(_, role, permission)| CheckReport {
                    role,
                    permission,
                    granted: check_permission(role, permission),
                })
                .collect(),
        };
        return serde_json::to_string_pretty(&document);
    }

    let mut out = String::new();
    for def in table.iter() {
        let permissions = get_user_permissions(def.role.as_str());
        let _ = writeln!(out, "{} ({}) permissions:", def.display_name, def.role);
        out.push_str(&render_permissions(&permissions, format)?);
    }

    out.push_str("\nPermission checks:\n");
    for (label, role, permission) in DEMO_CHECKS {
        let _ = writeln!(out, "{}: {}", label, check_permission(role, permission));
    }
    Ok(out)
}

fn run(args: &Args) -> Result<(String, Outcome), serde_json::Error> {
    tracing::debug!(command = ?args.command, format = ?args.format, "Running command");
    match &args.command {
        Command::Roles => Ok((render_roles(args.format)?, Outcome::Success)),
        Command::Permissions { role } => run_permissions(role, args.format),
        Command::Check { role, permission } => run_check(role, permission, args.format),
        Command::Demo => Ok((render_demo(args.format)?, Outcome::Success)),
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so stdout stays machine-readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let (output, outcome) = run(&args)?;

    let output = output.trim_end();
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(ExitCode::from(outcome.code()))
}
