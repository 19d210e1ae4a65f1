pub mod reading;
pub mod regions;
pub mod report;
pub mod schema;

pub use reading::EnvironmentalInput;
pub use regions::{Location, LocationError, NE_LOCATIONS, Region, find_state};
pub use report::{ReportError, RiskLevel, RiskReport};
pub use schema::risk_report_schema;
