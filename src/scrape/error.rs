use std::fmt::Display;

/// Per-item failures of the extraction pipeline. Every variant degrades the
/// item it names (one date, one section, one selection) and is logged by the
/// caller; none of them aborts a run.
#[derive(Debug)]
pub enum Error {
    InvalidDateLabel(String),
    SelectionNotFound(String),
    ContentTimeout(String),
    MalformedSection(String),
    Driver(String),
}

impl Error {
    pub fn invalid_date_label(label: &str) -> Self {
        Self::InvalidDateLabel(label.to_string())
    }
    pub fn selection_not_found(msg: &str) -> Self {
        Self::SelectionNotFound(msg.to_string())
    }
    pub fn content_timeout(msg: &str) -> Self {
        Self::ContentTimeout(msg.to_string())
    }
    pub fn malformed_section(msg: &str) -> Self {
        Self::MalformedSection(msg.to_string())
    }
    pub fn driver_error(msg: &str) -> Self {
        Self::Driver(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateLabel(label) => write!(f, "Invalid date label: {label}"),
            Self::SelectionNotFound(msg) => write!(f, "Selection not found: {msg}"),
            Self::ContentTimeout(msg) => write!(f, "Content never stabilized: {msg}"),
            Self::MalformedSection(msg) => write!(f, "Malformed section: {msg}"),
            Self::Driver(msg) => write!(f, "Driver error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
