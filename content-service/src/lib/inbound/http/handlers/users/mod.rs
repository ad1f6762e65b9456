pub mod create_user;
pub mod get_me;
pub mod get_user;

pub use create_user::create_user;
pub use get_me::get_me;
pub use get_user::get_user;
