pub mod dispatcher;
pub mod form;

pub use crate::domain::action::Action;
pub use crate::domain::model::{ApiResponse, Fields};
pub use crate::domain::ports::SheetsApi;
pub use crate::utils::error::Result;
