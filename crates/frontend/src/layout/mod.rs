pub mod global_context;
pub mod notifications;
pub mod top_header;
