pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::DispatcherConfig;
pub use core::dispatcher::RequestDispatcher;
pub use domain::action::Action;
pub use domain::model::{ApiResponse, FieldValue, Fields, ResponseStatus};
pub use domain::ports::SheetsApi;
pub use domain::records::{Client, InvoiceRow, Project};
pub use utils::error::{DispatchError, Result};
