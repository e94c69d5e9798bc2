mod auth;
mod product;
mod text;
mod user;

pub use self::auth::LoginRequest;
pub use self::product::UpdateProductFieldRequest;
pub use self::text::TextQuery;
pub use self::user::CreateUserRequest;
