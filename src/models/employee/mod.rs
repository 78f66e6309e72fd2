pub mod queries;
pub mod table;
pub mod types;
pub mod wizard;

pub use queries::*;
pub use table::EmployeeTable;
pub use types::*;
