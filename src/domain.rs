// Domain layer modules
pub mod invocation_response;

// Re-exports
pub use invocation_response::{InvocationResponse, CONTENT_TYPE_JSON};
