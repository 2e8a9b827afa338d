pub(crate) mod example;
mod render;

use crate::Cli;
use crate::CommandResult;
use example::ExampleCmd;
use render::RenderCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-query")]
pub(crate) enum CommandEnum {
    /// Print the built-in article example document.
    Example(ExampleCmd),
    /// Render JSON query-description files as GraphQL documents.
    Render(Box<RenderCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Example(cmd) => cmd.run(cli).await,
            Self::Render(cmd) => cmd.run(cli).await,
        }
    }
}
