pub mod item;

pub use item::{CreateItemInput, Item, NewItem};
