mod auth;
mod hashing;
mod jwt;
mod product;
mod text;
mod user;

pub use self::auth::{DynLoginService, LoginServiceTrait};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::text::{DynTextQueryRepository, DynTextService, TextQueryRepositoryTrait, TextServiceTrait};
pub use self::user::{
    DynUserCommandRepository, DynUserCommandService, DynUserQueryRepository,
    UserCommandRepositoryTrait, UserCommandServiceTrait, UserQueryRepositoryTrait,
};
