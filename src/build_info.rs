//! Version and build metadata for `bmicalc version`

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Compile time in ISO 8601, set by `build.rs`
pub const BUILD_TIMESTAMP: &str = env!("BMICALC_BUILD_TIMESTAMP");
/// Cargo profile the binary was built with (`debug` or `release`)
pub const BUILD_PROFILE: &str = env!("BMICALC_BUILD_PROFILE");

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub profile: &'static str,
    pub built_at: Option<DateTime<Utc>>,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            profile: BUILD_PROFILE,
            built_at: DateTime::parse_from_rfc3339(BUILD_TIMESTAMP)
                .ok()
                .map(|t| t.with_timezone(&Utc)),
        }
    }

    /// `bmicalc 1.0.0 (release, built 2024-03-09 14:30 UTC)`
    pub fn summary(&self) -> String {
        let built = self
            .built_at
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        format!("{} {} ({}, built {})", self.name, self.version, self.profile, built)
    }
}
