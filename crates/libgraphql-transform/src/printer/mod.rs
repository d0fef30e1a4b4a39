mod graphql_printer;
mod print_error;
mod printer_options;

pub use graphql_printer::GraphQLPrinter;
pub use print_error::PrintError;
pub use printer_options::PrintStyle;
pub use printer_options::PrinterOptions;
