pub mod occupancy_report;
pub mod password_service;
