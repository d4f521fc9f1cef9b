use std::io;
use std::path::PathBuf;

use incept::error::Error;

#[test]
fn test_error_display() {
    let err = Error::ValidationError("'author' must not be empty".to_string());
    assert_eq!(err.to_string(), "Validation error: 'author' must not be empty.");

    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::UnknownArchetypeError { name: "django".to_string() };
    assert_eq!(err.to_string(), "Unknown archetype: 'django'.");
}

#[test]
fn test_io_error_names_path() {
    let err = Error::IoError {
        path: PathBuf::from("out/foo/setup.py"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };

    let message = err.to_string();
    assert!(message.starts_with("IO error: 'out/foo/setup.py'"));
    assert!(message.contains("permission denied"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_duplicate_path_display() {
    let err = Error::DuplicatePathError { path: PathBuf::from("root/setup.py") };
    assert!(err.to_string().contains("'root/setup.py'"));
}
