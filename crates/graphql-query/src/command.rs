use crate::Cli;
use crate::CommandResult;

/// A `graphql-query` subcommand, run once against the parsed [`Cli`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
