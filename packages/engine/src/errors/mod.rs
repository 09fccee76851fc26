use crate::RewriteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Syntax,
    Structural,
    Reconstruction,
    InvalidArgument,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "ROWCAP_ERROR_SYNTAX",
            Self::Structural => "ROWCAP_ERROR_STRUCTURAL",
            Self::Reconstruction => "ROWCAP_ERROR_RECONSTRUCTION",
            Self::InvalidArgument => "ROWCAP_ERROR_INVALID_ARGUMENT",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[
            Self::Syntax,
            Self::Structural,
            Self::Reconstruction,
            Self::InvalidArgument,
        ]
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RewriteError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax { .. } => ErrorCode::Syntax,
            Self::Structural(_) => ErrorCode::Structural,
            Self::Reconstruction(_) => ErrorCode::Reconstruction,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
        }
    }
}
