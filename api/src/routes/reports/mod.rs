pub mod analyze_report_route;
pub mod get_report_route;
pub mod report_query;
pub mod report_response;
