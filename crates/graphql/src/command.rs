use crate::Cli;
use crate::CommandResult;
use crate::commands;
use libgraphql_transform::GraphQLRequest;
use libgraphql_transform::PrinterOptions;
use std::path::Path;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

/// A command that loads a single request envelope and renders one payload
/// from it.
pub(crate) trait RequestCommand {
    fn request_path(&self) -> &Path;

    fn apply(
        &self,
        request: &mut GraphQLRequest,
        options: &PrinterOptions,
    ) -> anyhow::Result<String>;

    async fn run_on_request(&self, cli: &Cli) -> CommandResult {
        let options = cli.printer_options();
        let output = match commands::read_request(self.request_path()).await {
            Ok(mut request) => self.apply(&mut request, &options),
            Err(e) => Err(e),
        };
        CommandResult::from_output(output)
    }
}
