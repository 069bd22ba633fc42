pub use super::bump::Entity as Bump;
pub use super::reminder::Entity as Reminder;
pub use super::setting::Entity as Setting;
pub use super::user::Entity as User;
