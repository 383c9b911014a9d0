pub mod analysis_types;
pub mod gauge_types;
pub mod session_types;
