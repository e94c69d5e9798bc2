mod product;
mod text;
mod user;

pub use self::product::{PRODUCT_COLUMNS, Product};
pub use self::text::TextEntry;
pub use self::user::{NewUser, User};
