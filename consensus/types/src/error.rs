use crate::{ForkName, Role};
use ssz::ErrorKind;

/// Errors raised while resolving, decoding or inspecting fork-variant records.
#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    SszDecodeError(ssz::DecodeError),
    SszTypesError(ssz_types::Error),
    BitfieldError(ssz::BitfieldError),
    /// There is no shape for `role` at `fork_name`, e.g. an execution payload before Bellatrix.
    SchemaMismatch { fork_name: ForkName, role: Role },
    /// A superstruct cast or partial getter was used on the wrong variant.
    IncorrectForkVariant,
}

impl Error {
    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SszDecodeError(e) => e.kind(),
            Error::SszTypesError(e) => e.kind(),
            Error::BitfieldError(e) => e.kind(),
            Error::SchemaMismatch { .. } | Error::IncorrectForkVariant => ErrorKind::SchemaMismatch,
        }
    }
}

impl From<ssz::DecodeError> for Error {
    fn from(e: ssz::DecodeError) -> Error {
        Error::SszDecodeError(e)
    }
}

impl From<ssz_types::Error> for Error {
    fn from(e: ssz_types::Error) -> Error {
        Error::SszTypesError(e)
    }
}

impl From<ssz::BitfieldError> for Error {
    fn from(e: ssz::BitfieldError) -> Error {
        Error::BitfieldError(e)
    }
}
