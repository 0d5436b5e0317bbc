mod dashboard;
mod submit;

pub use dashboard::DashboardPage;
pub use submit::SubmitPage;
