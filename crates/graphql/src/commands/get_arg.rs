use crate::Cli;
use crate::CommandResult;
use crate::RequestCommand;
use crate::RunnableCommand;
use libgraphql_transform::ArgumentValue;
use libgraphql_transform::GraphQLRequest;
use libgraphql_transform::PrinterOptions;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GetArgCmd {
    #[arg(help="Path to a JSON request envelope.")]
    request_path: PathBuf,

    #[arg(help="Name of a field selected at the top level of an operation.")]
    field_name: String,

    #[arg(help="Name of the argument on that field.")]
    argument_name: String,

    #[arg(help="Attribute path into the argument's value.")]
    path: Vec<String>,
}

impl GetArgCmd {
    pub(crate) fn describe(&self, request: &mut GraphQLRequest) -> String {
        let path: Vec<&str> = self.path.iter().map(String::as_str).collect();
        let mut value = request.get_argument_value(&self.field_name, &self.argument_name, &path);
        describe_value(value.as_mut())
    }
}

impl RequestCommand for GetArgCmd {
    fn request_path(&self) -> &Path {
        &self.request_path
    }

    fn apply(
        &self,
        request: &mut GraphQLRequest,
        _options: &PrinterOptions,
    ) -> anyhow::Result<String> {
        Ok(self.describe(request))
    }
}

#[inherent::inherent]
impl RunnableCommand for GetArgCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        self.run_on_request(&cli).await
    }
}

/// Render a resolved value as JSON-ish text: scalars as themselves, lists
/// and objects recursively, anything missing as `null`.
pub(crate) fn describe_value(value: &mut dyn ArgumentValue<'_>) -> String {
    if value.is_null() {
        return "null".to_string();
    }
    if let Some(int) = value.as_int() {
        return int.to_string();
    }
    if let Some(double) = value.as_double() {
        return double.to_string();
    }
    if let Some(boolean) = value.as_bool() {
        return boolean.to_string();
    }
    if let Some(text) = value.as_str() {
        return serde_json::Value::from(text).to_string();
    }
    if let Some(mut items) = value.as_list() {
        let items: Vec<String> = items.iter_mut()
            .map(|item| describe_value(item.as_mut()))
            .collect();
        return format!("[{}]", items.join(", "));
    }
    if let Some(mut fields) = value.as_map() {
        let fields: Vec<String> = fields.iter_mut()
            .map(|(name, field)| format!("{name}: {}", describe_value(field.as_mut())))
            .collect();
        return format!("{{{}}}", fields.join(", "));
    }
    "null".to_string()
}
