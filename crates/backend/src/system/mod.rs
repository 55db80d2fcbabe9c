pub mod handlers;
pub mod initialization;
pub mod middleware;
pub mod tracing;
