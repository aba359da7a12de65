pub mod detail_modal;
pub mod entry_modal;
pub mod page;
pub mod report_modal;

pub use page::FinancialReportsEditor;
