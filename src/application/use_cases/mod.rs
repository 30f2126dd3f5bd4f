pub mod answer_question;

pub use answer_question::*;
