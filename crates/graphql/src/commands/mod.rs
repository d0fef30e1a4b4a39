mod add_field;
pub(crate) mod get_arg;
mod merge;
pub(crate) mod print;
mod remove_field;
mod set_arg;

use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use add_field::AddFieldCmd;
use get_arg::GetArgCmd;
use libgraphql_transform::GraphQLRequest;
use libgraphql_transform::JsonMessage;
use merge::MergeCmd;
use print::PrintCmd;
use remove_field::RemoveFieldCmd;
use set_arg::SetArgCmd;
use std::path::Path;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-transform")]
pub(crate) enum CommandEnum {
    /// Add a (possibly nested) selection beneath a top-level field.
    AddField(AddFieldCmd),

    /// Print the resolved value of an argument.
    GetArg(GetArgCmd),

    /// Append the arrays found under an element name in one message to
    /// those in another.
    Merge(MergeCmd),

    /// Re-print request envelopes, pruning unused variables.
    Print(Box<PrintCmd>),

    /// Remove a (possibly nested) field from a JSON message.
    RemoveField(RemoveFieldCmd),

    /// Replace an argument on every matching top-level field.
    SetArg(SetArgCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::AddField(cmd) => cmd.run(cli).await,
            Self::GetArg(cmd) => cmd.run(cli).await,
            Self::Merge(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::RemoveField(cmd) => cmd.run(cli).await,
            Self::SetArg(cmd) => cmd.run(cli).await,
        }
    }
}

async fn read_to_string(path: &Path) -> anyhow::Result<String> {
    log::debug!("Reading {path:#?}...");
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Unable to read {path:#?}"))
}

pub(crate) async fn read_request(path: &Path) -> anyhow::Result<GraphQLRequest> {
    let payload = read_to_string(path).await?;
    payload.parse::<GraphQLRequest>()
        .with_context(|| format!("Unable to load a GraphQL request from {path:#?}"))
}

pub(crate) async fn read_message(path: &Path) -> anyhow::Result<JsonMessage> {
    let payload = read_to_string(path).await?;
    payload.parse::<JsonMessage>()
        .with_context(|| format!("Unable to load a JSON message from {path:#?}"))
}

pub(crate) async fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let payload = read_to_string(path).await?;
    serde_json::from_str(&payload)
        .with_context(|| format!("Unable to parse JSON from {path:#?}"))
}
