//! Build script for bmicalc
//!
//! Embeds the compile timestamp and cargo profile shown by `bmicalc version`.

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=build.rs");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=BMICALC_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=BMICALC_BUILD_PROFILE={}", profile);
}
