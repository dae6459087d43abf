pub mod search_event;

pub use search_event::{CityCount, SearchEvent};
