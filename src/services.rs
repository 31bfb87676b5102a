pub mod filter_sort;
pub mod stock_monitor;
pub mod currency;

pub mod payout_service;
pub mod inventory_service;
pub mod analytics_service;
