mod canned_product_lookup;
mod echo_text_generator;
mod gemini_client;
mod http_product_lookup;

pub use canned_product_lookup::*;
pub use echo_text_generator::*;
pub use gemini_client::*;
pub use http_product_lookup::*;
