pub mod api;
pub mod state;
pub mod store;
pub mod ui;

pub use store::SalesStore;
pub use ui::SalesDashboard;
