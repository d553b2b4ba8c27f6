pub mod error;
pub mod health;
pub mod help;
pub mod product;
pub mod shopping_list;
pub mod tags;
