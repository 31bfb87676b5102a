pub mod analytics;
pub mod dashboard;
pub mod inventory;
pub mod modes;
pub mod money;
pub mod payout;
