//! Module containing the inline type-erased storage cell

mod raw;
mod vtable;

pub use self::raw::RawCell;
