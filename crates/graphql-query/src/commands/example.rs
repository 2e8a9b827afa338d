use crate::output_utils;
use crate::query_file::QueryFile;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

/// The headline, body and opener image of one article.
///
/// The image's `id` and `url` come from fragments (one nested in the other),
/// and the image request itself sits inside the article's content fragment.
pub(crate) const ARTICLE_QUERY_JSON: &str = include_str!("article_query.json");

#[derive(Debug, clap::Args)]
pub(crate) struct ExampleCmd {
    #[arg(
        help="Also print a dump of the document tree.",
        long,
    )]
    debug: bool,
}

#[inherent::inherent]
impl RunnableCommand for ExampleCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let query = match QueryFile::from_json_str(ARTICLE_QUERY_JSON) {
            Ok(query_file) => query_file.into_query(),
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to parse the example query description: {err}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Built example query with {} fragment(s).",
            query.fragments().len(),
        );

        match query.create() {
            Ok(document) if self.debug => CommandResult::stdout(format_args!(
                "{document}\n\n{}",
                query.debug_dump(),
            )),

            Ok(document) => CommandResult::stdout(format_args!("{document}")),

            Err(errors) => CommandResult::stderr(format_args!(
                "{} Errors building the example query: {errors:#?}",
                output_utils::RED_X,
            )),
        }
    }
}
