pub mod audit;
pub mod employees;
pub mod lookups;
pub mod users;
