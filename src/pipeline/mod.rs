//! Pipeline entry points.
//!
//! - `run_load`: Fetch both CSV resources and map them into a `ReadingList`

pub mod load;

pub use load::{load_reading_list, run_load};
