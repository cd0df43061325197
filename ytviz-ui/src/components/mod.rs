//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod sidebar;
pub mod loading;
pub mod card;
pub mod bar_chart;
pub mod pie_chart;
pub mod data_table;
pub mod topic_list;
pub mod content;

pub use nav::Nav;
pub use sidebar::Sidebar;
pub use loading::Loading;
pub use card::Card;
pub use bar_chart::WordFrequencyChart;
pub use pie_chart::SentimentPieChart;
pub use data_table::DataTable;
pub use topic_list::TopicListCard;
pub use content::Content;
