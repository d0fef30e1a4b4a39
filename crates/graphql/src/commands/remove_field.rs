use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands;
use libgraphql_transform::json::json_util;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct RemoveFieldCmd {
    #[arg(help="Path to a JSON message.")]
    message_path: PathBuf,

    #[arg(
        help="Field names leading to the field to remove. Every segment but \
             the last is searched for at any depth.",
        required=true,
    )]
    path: Vec<String>,
}

impl RemoveFieldCmd {
    pub(crate) fn apply(&self, node: &mut serde_json::Value) -> String {
        let path: Vec<&str> = self.path.iter().map(String::as_str).collect();
        json_util::remove_field(node, &path);
        node.to_string()
    }
}

#[inherent::inherent]
impl RunnableCommand for RemoveFieldCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let output = commands::read_json(&self.message_path)
            .await
            .map(|mut node| self.apply(&mut node));
        CommandResult::from_output(output)
    }
}
