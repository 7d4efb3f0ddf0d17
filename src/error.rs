use crate::tree::MAX_TREE_DEPTH;
use std::error;
use std::fmt;
use std::result;
use std::string::FromUtf8Error;

/// Errors reported by the caller-facing operations of this crate.
///
/// Duplicate insertions are never errors; they are reported through the return value of the
/// operation (`false`, `None`, or an unchanged root).
#[derive(Debug)]
pub enum Error {
    InvalidNumber(String),
    InvalidTableSize(usize),
    TableFull,
    TooManyVertices(usize),
    TreeTooDeep(usize),
    UnknownAlgorithm(String),
    UnknownStrategy(String),
    InvalidLink(String),
    Serialize(serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Serialize(err)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Error {
        Error::InvalidLink(err.to_string())
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::InvalidLink(err.to_string())
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Serialize(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidNumber(input) => write!(f, "`{}` is not a valid number", input),
            Error::InvalidTableSize(size) => {
                write!(f, "table size must be a positive integer, got {}", size)
            },
            Error::TableFull => write!(f, "table is full"),
            Error::TooManyVertices(count) => {
                write!(f, "vertex count must be at most 100, got {}", count)
            },
            Error::TreeTooDeep(depth) => {
                write!(f, "tree depth must be at most {}, got {}", MAX_TREE_DEPTH, depth)
            },
            Error::UnknownAlgorithm(name) => write!(f, "unknown tree algorithm `{}`", name),
            Error::UnknownStrategy(name) => write!(f, "unknown hash strategy `{}`", name),
            Error::InvalidLink(reason) => write!(f, "invalid link: {}", reason),
            Error::Serialize(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(Error::TableFull.to_string(), "table is full");
        assert_eq!(
            Error::InvalidNumber(String::from("abc")).to_string(),
            "`abc` is not a valid number",
        );
        assert_eq!(
            Error::UnknownStrategy(String::from("cuckoo")).to_string(),
            "unknown hash strategy `cuckoo`",
        );
        assert_eq!(Error::TreeTooDeep(300).to_string(), "tree depth must be at most 256, got 300");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        match Error::from(err) {
            Error::Serialize(_) => {},
            other => panic!("unexpected error {:?}", other),
        }
    }
}
