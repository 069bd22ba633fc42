mod bump;
mod query;
mod reminder;
mod scan;
