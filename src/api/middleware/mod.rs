pub mod request_id;
pub mod session;

pub use request_id::{RequestId, RequestIdMiddleware};
pub use session::SessionMiddleware;
