pub mod books;
pub mod collection;
pub mod memorized_item;
pub mod quality;
pub mod reference;
pub mod review_session;
pub mod scheduler;
pub mod sm2;

pub use collection::{CollectionSummary, MemoryCollection};
pub use memorized_item::MemorizedItem;
pub use quality::{Quality, ReviewOutcome};
pub use reference::VerseReference;
pub use review_session::ReviewSession;
pub use scheduler::{select_due, select_due_now};
pub use sm2::grade;
