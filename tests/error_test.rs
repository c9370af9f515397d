use std::io;

use twinstack::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ValidationError("application is empty in 'acme/'".to_string());
    assert_eq!(err.to_string(), "Validation error: application is empty in 'acme/'.");

    let err = Error::PromptError("stdin closed".to_string());
    assert_eq!(err.to_string(), "Prompt error: stdin closed.");
}
