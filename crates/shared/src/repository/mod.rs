mod product;
mod text;
mod user;

pub use self::product::ProductRepository;
pub use self::text::TextRepository;
pub use self::user::UserRepository;
