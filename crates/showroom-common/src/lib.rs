pub mod errors;
pub mod id;

pub use errors::{ConfigError, ShowroomError};
pub use id::{new_correlation_id, InvalidThreadId, ThreadId, MAX_THREAD_ID_LEN};
