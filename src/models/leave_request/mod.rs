pub mod queries;
pub mod table;
pub mod types;

pub use queries::*;
pub use table::LeaveRequestTable;
pub use types::*;
