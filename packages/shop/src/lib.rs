pub mod catalog;
pub mod envelope;
pub mod models;
pub mod poll;
pub mod session;
pub mod status;

mod timer;
pub use timer::sleep;

pub use catalog::{CatalogFilter, SortOrder, SpecialOffer};
pub use models::{Appointment, Article, Konsultan, Order, Product, User};
pub use poll::{FetchOutcome, PollHandle, PollPolicy, PollSlot, PollUpdate, StatusSource};
pub use session::SessionState;
pub use status::{Resolution, StatusSnapshot, StatusView};
