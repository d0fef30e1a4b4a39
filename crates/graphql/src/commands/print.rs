use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use crate::output_utils;
use libgraphql_transform::GraphQLRequest;
use libgraphql_transform::JsonMessage;
use libgraphql_transform::PrinterOptions;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    json_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more JSON request envelopes or directories \
             containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl PrintCmd {
    /// Every file at or under the input paths whose extension is one of
    /// `--json-file-exts`. A lone file argument is always included.
    pub(crate) fn collect_file_paths(&self) -> anyhow::Result<Vec<PathBuf>> {
        let json_file_exts: HashSet<String> =
            self.json_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!("Scanning {} input paths...", self.file_or_dir_paths.len());
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }
                if let Some(ext) = entry_path.extension().map(|s| s.to_string_lossy())
                    && json_file_exts.contains(&*ext) {
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to print {first_arg_path:#?} even though it doesn't \
                match any of the --json-file-exts.",
            );
            file_paths.push(first_arg_path.to_owned());
        }
        Ok(file_paths)
    }
}

/// Re-print every request in `message` (one per batch element) as one
/// line of JSON each.
pub(crate) fn print_message(
    message: JsonMessage,
    options: &PrinterOptions,
) -> anyhow::Result<Vec<String>> {
    let elements = match message {
        JsonMessage::Single(element) => vec![element],
        JsonMessage::Batch(elements) => elements,
    };
    elements.into_iter()
        .map(|element| -> anyhow::Result<String> {
            let mut request = GraphQLRequest::from_object(element)?;
            Ok(request.write_value_as_string(options)?)
        })
        .collect()
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let options = cli.printer_options();
        let file_paths = match self.collect_file_paths() {
            Ok(file_paths) => file_paths,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Unable to scan input paths: {e:#}",
                output_utils::RED_X,
            )),
        };
        log::debug!("Found {} JSON files to print.", file_paths.len());

        let mut printed = vec![];
        let mut errors = vec![];
        for file_path in &file_paths {
            let result = match commands::read_message(file_path).await {
                Ok(message) => print_message(message, &options),
                Err(e) => Err(e),
            };
            match result {
                Ok(lines) => printed.extend(lines),
                Err(e) => errors.push(format!("{file_path:#?}: {e:#}")),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors printing {} of {} files:\n  * {}",
                output_utils::RED_X,
                errors.len(),
                file_paths.len(),
                errors.join("\n  * "),
            ));
        }
        log::info!("{} Printed {} requests.", output_utils::GREEN_CHECK, printed.len());
        CommandResult::stdout(format_args!("{}", printed.join("\n")))
    }
}
