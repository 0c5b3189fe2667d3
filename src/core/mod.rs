pub mod fetch;

pub use crate::domain::model::{FetchRequest, SuccessCriterion, TransportResponse};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
