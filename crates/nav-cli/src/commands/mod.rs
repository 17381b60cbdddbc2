pub mod default_section;
pub mod dispatch;
pub mod match_route;
pub mod resolve;
pub mod routes;
pub mod sections;
pub mod sidebar;
