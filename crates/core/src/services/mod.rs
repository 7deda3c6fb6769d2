pub mod calculator_service;
pub mod calendar_service;
pub mod summary_service;
