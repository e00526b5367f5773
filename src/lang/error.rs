use crate::mach::Vector;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    position: Option<Vector>,
    instruction: Option<char>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at($pos)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $pos:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at($pos)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            position: None,
            instruction: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn position(&self) -> Option<Vector> {
        self.position
    }

    pub fn instruction(&self) -> Option<char> {
        self.instruction
    }

    pub fn at(self, position: Vector) -> Error {
        Error {
            position: Some(position),
            ..self
        }
    }

    pub fn in_instruction(self, instruction: char) -> Error {
        Error {
            instruction: Some(instruction),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    StackUnderflow = 1,
    BaseFrameRemoval = 2,
    OutOfMemory = 7,
    FileNotFound = 53,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::StackUnderflow => "stack underflow",
            ErrorCode::BaseFrameRemoval => "cannot remove base frame",
            ErrorCode::OutOfMemory => "out of memory",
            ErrorCode::FileNotFound => "file not found",
            ErrorCode::InternalError => "internal error",
        };
        let mut suffix = String::new();
        if let Some(pos) = self.position {
            suffix.push_str(&format!(" at {},{}", pos.x, pos.y));
        }
        if let Some(ch) = self.instruction {
            suffix.push_str(&format!(" ({:?})", ch));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", code_str, suffix)
    }
}

impl std::error::Error for Error {}
