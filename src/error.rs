use std::error;
use std::fmt;




/**
 * Error to represent invalid input to the orthogonalizer, out-of-range
 * coordinate edits, and failures to encode or decode a snapshot.
 */
#[derive(Debug)]
pub enum Error {
    VectorCount(usize),
    InconsistentDimension { index: usize },
    UnsupportedDimension(u8),
    CoordinateOutOfRange { index: usize, axis: usize },
    InvalidVector(String),
    Encode(String),
    Decode(String),
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;




// ============================================================================
impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> std::result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            VectorCount(n) => write!(fmt, "expected 2 or 3 vectors, got {}", n),
            InconsistentDimension { index } => write!(fmt, "vector v{} has a non-zero z component in 2D mode", index + 1),
            UnsupportedDimension(d) => write!(fmt, "unsupported dimension: {}", d),
            CoordinateOutOfRange { index, axis } => write!(fmt, "no active coordinate at vector {} axis {}", index, axis),
            InvalidVector(text) => write!(fmt, "invalid vector: {:?}", text),
            Encode(msg) => write!(fmt, "encode failed: {}", msg),
            Decode(msg) => write!(fmt, "decode failed: {}", msg),
            Io(e) => write!(fmt, "i/o error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::Error;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(Error::VectorCount(4).to_string(), "expected 2 or 3 vectors, got 4");
        assert_eq!(Error::UnsupportedDimension(5).to_string(), "unsupported dimension: 5");
        assert!(Error::InconsistentDimension { index: 1 }.to_string().contains("v2"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;
        let e: Error = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(e.source().is_some());
        assert!(Error::VectorCount(1).source().is_none());
    }
}
