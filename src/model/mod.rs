//! Plain data: catalog records and the cart's copies of them.

pub mod cart_item;
pub mod gallery;
pub mod product;

pub use cart_item::*;
pub use gallery::*;
pub use product::*;
