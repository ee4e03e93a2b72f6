use std::{
    any::Any,
    fmt::{self, Display},
};

/// Something that went wrong while a sub-test or one of its hooks executed.
///
/// Assertion failures are not exceptions, they are counted on the sub-test and
/// never abort it. An exception ends the current sub-test early.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Exception {
    /// The test method returned an error.
    Error(String),

    /// The test method or a hook panicked.
    Panicked {
        message: String,
        location: Option<String>,
        backtrace: Vec<String>,
    },
}

impl Exception {
    /// Convert a panic payload into a string.
    ///
    /// This matches the common payload types produced by `panic!` (`&'static str` and `String`).
    /// Other payload types are formatted as a generic placeholder.
    pub fn payload_as_string(payload: &(dyn Any + Send)) -> String {
        if let Some(s) = payload.downcast_ref::<&'static str>() {
            return s.to_string();
        }
        if let Some(s) = payload.downcast_ref::<String>() {
            return s.clone();
        }
        String::from("Box<dyn Any>")
    }

    pub fn message(&self) -> &str {
        match self {
            Exception::Error(message) => message,
            Exception::Panicked { message, .. } => message,
        }
    }

    /// Human readable lines describing this exception, meant for the case log.
    ///
    /// The first line carries the message, followed by the panic location and any
    /// captured backtrace frames.
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            Exception::Error(message) => vec![format!("Error: {message}")],
            Exception::Panicked {
                message,
                location,
                backtrace,
            } => {
                let mut lines = Vec::with_capacity(2 + backtrace.len());
                lines.push(format!("Panic: {message}"));
                if let Some(location) = location {
                    lines.push(format!("    at {location}"));
                }
                lines.extend(backtrace.iter().cloned());
                lines
            }
        }
    }
}

impl Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exception::Error(message) => write!(f, "error: {message}"),
            Exception::Panicked { message, .. } => write!(f, "panicked: {message}"),
        }
    }
}
