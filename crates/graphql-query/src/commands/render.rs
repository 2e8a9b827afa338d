use crate::output_utils;
use crate::query_file::QueryFile;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        help="Also print a dump of each document tree.",
        long,
    )]
    debug: bool,

    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    query_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more query-description files or directories \
             containing query-description files which need to be rendered.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        // Normalize the set of file extensions to filter with
        let query_file_exts: HashSet<String> =
            self.query_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && query_file_exts.contains(&*ext) {
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single explicitly-named file is rendered even if its extension
        // isn't one of `--query-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to render {first_arg_path:#?} even though it \
                doesn't match any of the --query-file-exts ({}).",
                query_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        log::debug!("Found {} query files to be rendered.", file_paths.len());

        let mut documents = vec![];
        for file_path in &file_paths {
            let query = match QueryFile::from_file(file_path) {
                Ok(query_file) => query_file.into_query(),
                Err(e) => {
                    errors.push(e.to_string());
                    continue;
                },
            };

            match query.create() {
                Ok(document) => {
                    let mut rendered = format!("# {}\n{document}", file_path.display());
                    if self.debug {
                        rendered.push_str("\n\n");
                        rendered.push_str(&query.debug_dump());
                    }
                    documents.push(rendered);
                },

                Err(query_errors) => {
                    for query_error in query_errors {
                        errors.push(format!("{}: {query_error}", file_path.display()));
                    }
                },
            }
        }

        if errors.is_empty() {
            return CommandResult::stdout(format_args!(
                "{}\n\n{} Rendered {} query files.",
                documents.join("\n\n"),
                output_utils::GREEN_CHECK,
                documents.len(),
            ));
        }

        let stderr = format!(
            "{} {} error(s) rendering query files:\n{}",
            output_utils::RED_X,
            errors.len(),
            errors.iter()
                .map(|error| format!("  * {error}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        if documents.is_empty() {
            CommandResult::stderr(format_args!("{stderr}"))
        } else {
            CommandResult::partial_failure(documents.join("\n\n"), stderr)
        }
    }
}
