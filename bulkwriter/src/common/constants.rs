use std::time::Duration;

// bulk copy constants
pub const DEFAULT_BATCH_SIZE: usize = 4096;
/// `None` means the bulk copy never times out.
pub const DEFAULT_BULK_COPY_TIMEOUT: Option<Duration> = None;
pub const DEFAULT_ENABLE_STREAMING: bool = true;
