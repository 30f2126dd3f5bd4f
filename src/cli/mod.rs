use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a shopping question, grounded in catalog matches
    Ask {
        question: String,
    },

    /// Answer from a prepared context, skipping interpretation and lookup
    Summarize {
        context: String,
    },
}
