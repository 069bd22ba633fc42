pub mod reminder;
pub mod worker;
