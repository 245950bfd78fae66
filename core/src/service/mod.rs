pub mod accrual_service;
pub mod goal_service;
pub mod pay_service;
pub mod status_service;
