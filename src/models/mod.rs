pub mod department;
pub mod employee;
pub mod leave_request;
pub mod program;
pub mod role;
pub mod schedule;
pub mod shift_rotation;
pub mod table;
pub mod tenant;
pub mod user_access;
