use crate::scrape;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Scrape(scrape::Error),
    Request(reqwest::Error),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl From<scrape::Error> for Error {
    fn from(e: scrape::Error) -> Self {
        Error::Scrape(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Scrape(e) => write!(f, "Scrape error: {e}"),
            Error::Request(e) => write!(f, "Request error: {e}"),
            Error::Json(e) => write!(f, "Json error: {e}"),
            Error::Io(e) => write!(f, "Io error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
