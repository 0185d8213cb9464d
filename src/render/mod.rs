//! Output renderers for the filtered view.
//!
//! - `html`: standalone page with one table per tab
//! - `table`: aligned terminal table
//! - `export`: CSV in the source column order

pub mod export;
pub mod html;
pub mod table;

use std::str::FromStr;

use crate::error::{AppError, Result};

/// Output format for list commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(AppError::validation(format!("unknown output format '{other}'"))),
        }
    }
}
