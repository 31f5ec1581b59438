pub mod coupon;
pub mod product;
pub mod promotion;
pub mod target;
pub mod user;
