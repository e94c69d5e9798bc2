mod auth;
mod product;
mod text;
mod user;

pub use self::auth::{LoginService, LoginServiceDeps};
pub use self::product::ProductService;
pub use self::text::TextService;
pub use self::user::UserService;
