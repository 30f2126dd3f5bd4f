pub mod application;
pub mod cli;
pub mod config;
pub mod connector;
pub mod domain;

pub use application::{
    AnswerQuestionUseCase, LookupOutcome, ProductLookup, TextGenerator, ANSWER_MODEL,
    CONTEXT_MODEL, FALLBACK_ANSWER,
};

pub use cli::Commands;

pub use config::Settings;

pub use connector::{
    CannedProductLookup, Container, EchoTextGenerator, GeminiClient, HttpProductLookup, Router,
};

pub use domain::{
    DomainError, ProductCard, ProductRecord, QueryFilters, Specifications,
    DEFAULT_BUDGET_CEILING,
};
