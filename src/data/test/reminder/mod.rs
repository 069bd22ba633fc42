use crate::{
    data::reminder::ReminderRepository,
    model::reminder::{ReminderStatus, SetReminderParam},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod set;
