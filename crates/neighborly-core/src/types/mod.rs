//! Shared type definitions: identifiers, pagination, and sorting.

pub mod id;
pub mod pagination;
pub mod sorting;

pub use id::{MessageId, NotificationId, RequestId, UserId};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::RequestSort;
