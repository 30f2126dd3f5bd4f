use std::sync::Arc;

use tracing::{error, info};

use crate::application::{LookupOutcome, ProductLookup, TextGenerator};
use crate::domain::{DomainError, ProductCard, QueryFilters};

/// Model used by [`AnswerQuestionUseCase::answer`].
pub const ANSWER_MODEL: &str = "gemini-1.5-flash";

/// Model used by the legacy [`AnswerQuestionUseCase::answer_from_context`] path.
pub const CONTEXT_MODEL: &str = "gemini-pro";

/// How many products are requested from the catalog per question.
const PRODUCT_LIMIT: usize = 5;

/// Fixed reply returned by [`AnswerQuestionUseCase::answer`] when any step
/// of the pipeline fails.
pub const FALLBACK_ANSWER: &str =
    "Maaf, saya sedang mengalami kendala dalam memproses pertanyaan Anda. Silakan coba lagi nanti.";

const NO_PRODUCTS_SENTENCE: &str =
    "No specific products found, but I can provide general recommendations.";

/// Answers free-text shopping questions.
///
/// Interprets the question into catalog filters, fetches a handful of
/// matching products, renders them into a bounded prompt context, and asks
/// the generative model for the final reply.
pub struct AnswerQuestionUseCase {
    product_lookup: Arc<dyn ProductLookup>,
    text_generator: Arc<dyn TextGenerator>,
}

impl AnswerQuestionUseCase {
    pub fn new(
        product_lookup: Arc<dyn ProductLookup>,
        text_generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            product_lookup,
            text_generator,
        }
    }

    /// Answer a shopping question, grounding the reply in catalog matches
    /// where possible.
    ///
    /// This path never fails: lookup or generation errors are logged and
    /// replaced by [`FALLBACK_ANSWER`], so callers always get a printable
    /// reply.
    pub async fn answer(&self, question: &str) -> String {
        info!("Answering question: {:?}", question);

        match self.try_answer(question).await {
            Ok(answer) => {
                info!("Generated answer ({} chars)", answer.len());
                answer
            }
            Err(e) => {
                error!("Error generating AI response: {}", e);
                FALLBACK_ANSWER.to_string()
            }
        }
    }

    async fn try_answer(&self, question: &str) -> Result<String, DomainError> {
        let filters = QueryFilters::from_question(question);
        info!(
            "Interpreted filters: category={:?}, max_price={:?}",
            filters.category(),
            filters.max_price()
        );

        // Keyword stays the original question; only the matching is
        // case-insensitive.
        let outcome = self
            .product_lookup
            .search(
                question,
                filters.category(),
                filters.max_price(),
                PRODUCT_LIMIT,
            )
            .await?;

        let context = build_context(question, &outcome);
        let prompt = wrap_question_prompt(&context);

        self.text_generator.generate(ANSWER_MODEL, &prompt).await
    }

    /// Legacy single-shot path: wrap a caller-supplied context directly and
    /// generate with [`CONTEXT_MODEL`].
    ///
    /// Unlike [`Self::answer`], generation failures are logged and then
    /// propagated to the caller. Existing callers rely on seeing the error,
    /// so the asymmetry with the primary path is kept.
    pub async fn answer_from_context(&self, context: &str) -> Result<String, DomainError> {
        let prompt = wrap_context_prompt(context);

        match self.text_generator.generate(CONTEXT_MODEL, &prompt).await {
            Ok(answer) => Ok(answer),
            Err(e) => {
                error!("Error generating AI response from context: {}", e);
                Err(e)
            }
        }
    }
}

/// Assemble the textual context block: the question, the lookup's message,
/// and either a numbered product list or the fixed no-products sentence.
fn build_context(question: &str, outcome: &LookupOutcome) -> String {
    let mut context = format!("Question: {}\n\n{}\n\n", question, outcome.message);

    if outcome.products.is_empty() {
        context.push_str(NO_PRODUCTS_SENTENCE);
    } else {
        context.push_str("Relevant Products:\n");
        for (i, record) in outcome.products.iter().enumerate() {
            let card = ProductCard::from(record.clone());
            context.push_str(&card.display_block(i + 1));
        }
    }

    context
}

fn wrap_question_prompt(context: &str) -> String {
    format!(
        "You are a friendly shopping assistant for an electronics store. \
         Use the context below to answer the customer's question.\n\n\
         {}\n\n\
         Provide a clear, concise, and helpful answer.",
        context
    )
}

fn wrap_context_prompt(context: &str) -> String {
    format!(
        "You are a friendly shopping assistant for an electronics store.\n\n\
         {}\n\n\
         Provide a clear, concise, and helpful answer.",
        context
    )
}
