pub mod api_client;
pub mod gauge;
pub mod preview;
pub mod session;
