pub mod quotes;
pub mod setup;
pub mod transactions;
pub mod ui;
