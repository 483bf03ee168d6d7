pub type Result<T> = std::result::Result<T, ListError>;

/// Status reported for a successful push.
pub const STATUS_OK: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    NullList,
    NullNode,
}

impl ListError {
    /// Legacy integer status, as printed by the harness.
    pub fn code(&self) -> i32 {
        match self {
            ListError::NullList | ListError::NullNode => -1,
        }
    }
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::NullList => write!(f, "invalid argument: list is null"),
            ListError::NullNode => write!(f, "invalid argument: node is null"),
        }
    }
}

impl std::error::Error for ListError {}

pub fn status_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => e.code(),
    }
}
