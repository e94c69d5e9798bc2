pub mod product_field;
pub mod requests;
pub mod responses;
