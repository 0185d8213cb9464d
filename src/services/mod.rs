//! Service layer for the reading list.
//!
//! This module contains the business logic for:
//! - CSV tokenizing and writing (`csv`)
//! - Row-to-record mapping (`RecordMapper`)
//! - Filter state and row derivation (`ViewState`)
//! - Filter options (`Facets`)

pub mod csv;
mod facets;
mod mapper;
pub mod view;

pub use facets::Facets;
pub use mapper::RecordMapper;
pub use view::{Action, Filters, Tab, ViewState};
