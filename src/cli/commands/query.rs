use clap::Args;

#[derive(Debug, Args)]
pub struct QueryCommand {
    /// Gateway host:port address (e.g. localhost:50051)
    #[arg(long = "host", value_name = "HOST:PORT", default_value = "localhost:50051")]
    pub host: String,

    /// Free-form user query to analyze
    #[arg(short = 't', long = "text", value_name = "TEXT")]
    pub text: String,

    /// Context label passed along with the query
    #[arg(long = "context", default_value = "article_search")]
    pub context: String,

    /// Deadline for the call in seconds
    #[arg(long = "timeout", value_name = "SECS", default_value_t = 60)]
    pub timeout: u64,
}
