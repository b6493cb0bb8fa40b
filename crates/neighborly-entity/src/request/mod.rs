//! Help-request entities: the core domain of the platform.

pub mod category;
pub mod filter;
pub mod history;
pub mod location;
pub mod model;
pub mod rating;
pub mod status;
pub mod urgency;
pub mod verification;

pub use category::Category;
pub use filter::RequestFilter;
pub use history::{HistoryEntry, HistoryEventType};
pub use location::{GeoPoint, Location};
pub use model::{CreateRequest, HelpRequest};
pub use rating::Rating;
pub use status::RequestStatus;
pub use urgency::Urgency;
pub use verification::CompletionVerification;
