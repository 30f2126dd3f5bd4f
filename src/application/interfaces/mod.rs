mod product_lookup;
mod text_generator;

pub use product_lookup::*;
pub use text_generator::*;
