pub mod employee;
pub mod punch;
pub mod punch_type;
pub mod role;
pub mod window;
