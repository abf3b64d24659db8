use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;
use std::sync::Arc;

/// Error kinds for bulk copy operations.
///
/// Everything this crate reports is fatal at this layer. Nothing is retried;
/// errors raised by a [`BulkCopyConnection`](crate::bulk_copy::BulkCopyConnection)
/// implementation are carried through as [`ErrorKind::BulkCopyError`].
///
/// # Examples
///
/// ```rust,ignore
/// use bulkwriter::errors::{BulkWriterError, ErrorKind, BulkWriterResult};
///
/// fn example() -> BulkWriterResult<()> {
///     Err(BulkWriterError::new("item is required", ErrorKind::NullArgument))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A required argument was not supplied
    NullArgument,
    /// The entity type is missing or carries incorrect bulk copy metadata
    ConfigurationError,
    /// Failure reported by the bulk copy collaborator (allocation or row transfer)
    BulkCopyError,
    /// The operation is not valid in the current state (e.g. writing to a closed handle)
    InvalidOperation,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::NullArgument => write!(f, "Null argument"),
            ErrorKind::ConfigurationError => write!(f, "Configuration error"),
            ErrorKind::BulkCopyError => write!(f, "Bulk copy error"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type for all bulkwriter operations.
///
/// Carries a message, an [`ErrorKind`], an optional cause and the backtrace
/// captured where the error was created.
///
/// # Examples
///
/// ```rust,ignore
/// use bulkwriter::errors::{BulkWriterError, ErrorKind};
///
/// let cause = BulkWriterError::new("table 'Orders' does not exist", ErrorKind::BulkCopyError);
/// let err = BulkWriterError::new_with_cause("failed to allocate bulk copy", ErrorKind::BulkCopyError, cause);
/// ```
#[derive(Clone)]
pub struct BulkWriterError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<BulkWriterError>>,
    backtrace: Arc<Backtrace>,
}

impl BulkWriterError {
    /// Creates a new `BulkWriterError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        BulkWriterError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// Creates a new `BulkWriterError` wrapping the error that caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: BulkWriterError) -> Self {
        BulkWriterError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&BulkWriterError> {
        self.cause.as_deref()
    }
}

impl Display for BulkWriterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for BulkWriterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace),
        }
    }
}

impl Error for BulkWriterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for bulkwriter operations.
pub type BulkWriterResult<T> = Result<T, BulkWriterError>;

impl From<String> for BulkWriterError {
    fn from(msg: String) -> Self {
        BulkWriterError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for BulkWriterError {
    fn from(msg: &str) -> Self {
        BulkWriterError::new(msg, ErrorKind::InternalError)
    }
}
