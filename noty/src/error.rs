use std::error::Error;
use std::{fmt, io};

#[derive(Debug)]
pub enum StorageError {
    Unavailable(String),
    Read(String),
    Write(String),
    Serialize(String),
    Io(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(s) => {
                write!(f, "Storage unavailable: {}", s)
            }
            StorageError::Read(s) => write!(f, "Storage read failed: {}", s),
            StorageError::Write(s) => write!(f, "Storage write failed: {}", s),
            StorageError::Serialize(s) => {
                write!(f, "Serialization failed: {}", s)
            }
            StorageError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::Io(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialize(error.to_string())
    }
}

#[derive(Debug)]
pub enum NotyError {
    Storage(StorageError),
    Config(String),
}

impl fmt::Display for NotyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotyError::Storage(e) => write!(f, "{}", e),
            NotyError::Config(s) => write!(f, "Config error: {}", s),
        }
    }
}

impl Error for NotyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NotyError::Storage(e) => Some(e),
            NotyError::Config(_) => None,
        }
    }
}

impl From<StorageError> for NotyError {
    fn from(error: StorageError) -> Self {
        NotyError::Storage(error)
    }
}

impl From<serde_yaml::Error> for NotyError {
    fn from(error: serde_yaml::Error) -> Self {
        NotyError::Config(error.to_string())
    }
}
