//! Common constants used throughout the incept application.

/// Supported defaults file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["incept.json", "incept.yml", "incept.yaml"];

/// Directory the project root is created in when no other is configured
pub const DEFAULT_OUTPUT_DIR: &str = ".";
