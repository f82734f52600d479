use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    InvalidInput(String),
    OutOfRange(String),
    Decode(String),
    Encode(String),
    Io(String),
}

impl StoreError {
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn out_of_range<M: Into<String>>(message: M) -> Self {
        Self::OutOfRange(message.into())
    }

    pub fn decode<M: Into<String>>(message: M) -> Self {
        Self::Decode(message.into())
    }

    pub fn encode<M: Into<String>>(message: M) -> Self {
        Self::Encode(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::OutOfRange(_) => "out_of_range",
            Self::Decode(_) => "decode_error",
            Self::Encode(_) => "encode_error",
            Self::Io(_) => "io_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(message) => message,
            Self::OutOfRange(message) => message,
            Self::Decode(message) => message,
            Self::Encode(message) => message,
            Self::Io(message) => message,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for StoreError {}
