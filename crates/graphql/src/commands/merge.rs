use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use libgraphql_transform::JsonMessage;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct MergeCmd {
    #[arg(help="Path to the JSON message merged into.")]
    message_path: PathBuf,

    #[arg(help="Path to the JSON message whose arrays are appended.")]
    other_path: PathBuf,

    #[arg(help="Name of the array-valued element to merge, e.g. `tripPatterns`.")]
    element_name: String,
}

impl MergeCmd {
    pub(crate) fn apply(
        &self,
        message: &mut JsonMessage,
        other: &JsonMessage,
    ) -> anyhow::Result<String> {
        message.merge_elements(other, &self.element_name)
            .with_context(|| format!("Unable to merge `{}`", self.element_name))?;
        Ok(message.write_value_as_string()?)
    }
}

#[inherent::inherent]
impl RunnableCommand for MergeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (message, other) = tokio::join!(
            commands::read_message(&self.message_path),
            commands::read_message(&self.other_path),
        );
        let output = match (message, other) {
            (Ok(mut message), Ok(other)) => self.apply(&mut message, &other),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        CommandResult::from_output(output)
    }
}
