use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use crate::RequestCommand;
use crate::RunnableCommand;
use libgraphql_transform::GraphQLRequest;
use libgraphql_transform::PrinterOptions;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SetArgCmd {
    #[arg(help="Path to a JSON request envelope.")]
    request_path: PathBuf,

    #[arg(help="Name of a field selected at the top level of an operation.")]
    field_name: String,

    #[arg(help="Name of the argument to replace or add.")]
    argument_name: String,

    #[arg(help="New value as GraphQL literal text, e.g. `10`, `\"Oslo\"` or `[BUS, RAIL]`.")]
    value_literal: String,
}

impl RequestCommand for SetArgCmd {
    fn request_path(&self) -> &Path {
        &self.request_path
    }

    fn apply(
        &self,
        request: &mut GraphQLRequest,
        options: &PrinterOptions,
    ) -> anyhow::Result<String> {
        let value = GraphQLRequest::parse_value_literal(&self.value_literal)?;
        request.set_argument_value(&self.field_name, &self.argument_name, value)
            .with_context(|| format!("Unable to set `{}`", self.argument_name))?;
        Ok(request.write_value_as_string(options)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for SetArgCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        self.run_on_request(&cli).await
    }
}
