pub mod calendar;
pub mod daily_tip;
pub mod form;
pub mod month;
pub mod record;
pub mod settings;
pub mod summary;
pub mod tip_out;
