pub mod page;
pub mod report_view;
pub mod source_donut;
pub mod trend_chart;

pub use page::ReportsConsole;
