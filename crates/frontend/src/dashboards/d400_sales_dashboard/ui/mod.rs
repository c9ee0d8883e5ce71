pub mod dashboard;
pub mod filter_form;
pub mod sales_table;
pub mod sort_select;
pub mod stats_cards;

pub use dashboard::SalesDashboard;
