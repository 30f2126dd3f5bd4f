use anyhow::Result;

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Run the grounded question path. Always produces a printable answer.
    pub async fn ask(&self, question: String) -> Result<String> {
        let use_case = self.container.answer_use_case();

        Ok(use_case.answer(&question).await)
    }

    /// Run the legacy context-only path. Generation failures surface to the
    /// caller.
    pub async fn summarize(&self, context: String) -> Result<String> {
        let use_case = self.container.answer_use_case();

        let answer = use_case.answer_from_context(&context).await?;
        Ok(answer)
    }
}
