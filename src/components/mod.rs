mod export_button;
mod keyword_cloud;
mod monthly_chart;
mod sentiment_bars;
mod stat_tiles;
mod status;

pub use export_button::ExportButton;
pub use keyword_cloud::KeywordCloud;
pub use monthly_chart::MonthlyChart;
pub use sentiment_bars::SentimentBars;
pub use stat_tiles::StatTiles;
pub use status::{ErrorPanel, LoadingSpinner};
