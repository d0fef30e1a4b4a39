use crate::Cli;
use crate::CommandResult;
use crate::RequestCommand;
use crate::RunnableCommand;
use libgraphql_transform::GraphQLRequest;
use libgraphql_transform::PrinterOptions;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct AddFieldCmd {
    #[arg(help="Path to a JSON request envelope.")]
    request_path: PathBuf,

    #[arg(help="Name of a field selected at the top level of an operation.")]
    operation_field_name: String,

    #[arg(
        help="Field names leading from the top-level field down to the new selection.",
        required=true,
    )]
    path: Vec<String>,
}

impl RequestCommand for AddFieldCmd {
    fn request_path(&self) -> &Path {
        &self.request_path
    }

    fn apply(
        &self,
        request: &mut GraphQLRequest,
        options: &PrinterOptions,
    ) -> anyhow::Result<String> {
        let path: Vec<&str> = self.path.iter().map(String::as_str).collect();
        let added = request.add_selection_field(&self.operation_field_name, &path);
        if added.is_empty() {
            log::info!(
                "Nothing added beneath `{}`: the selection already exists or the \
                field is not selected.",
                self.operation_field_name,
            );
        } else {
            log::info!("Started adding fields at `{}`.", added.join("."));
        }
        Ok(request.write_value_as_string(options)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for AddFieldCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        self.run_on_request(&cli).await
    }
}
