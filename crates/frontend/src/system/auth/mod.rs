pub mod api;
pub mod guard;
pub mod redirect;
pub mod session;
pub mod storage;

pub use guard::RouteGuard;
pub use session::{provide_session, use_session, Session};
