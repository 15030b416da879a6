#![no_std]

mod constant_product;
mod tax;

pub use constant_product::*;
pub use tax::*;
