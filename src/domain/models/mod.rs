mod product;
mod query_filters;

pub use product::*;
pub use query_filters::*;
