mod product;
mod text;
mod token;
mod user;

pub use self::product::ProductResponse;
pub use self::text::TextsResponse;
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
