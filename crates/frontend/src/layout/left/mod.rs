pub mod logout;
pub mod sidebar;

pub use logout::LogoutButton;
pub use sidebar::Sidebar;
