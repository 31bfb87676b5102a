pub mod payouts;
pub mod inventory;
pub mod analytics;
