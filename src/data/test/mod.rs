mod bump;
mod reminder;
mod setting;
mod user;
