use clap::CommandFactory;
use crate::commands;
use libgraphql_transform::printer::PrintStyle;
use libgraphql_transform::PrinterOptions;

#[derive(clap::Parser, Debug)]
#[command(name = "graphql-transform", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        default_value_t=PrinterOptions::default().indent_width,
        global=true,
        help="Number of spaces per indentation step in printed queries.",
        long,
    )]
    pub indent_width: usize,

    #[arg(
        default_value="canonical",
        global=true,
        help="Layout of printed queries. `legacy` reproduces the output of \
             earlier releases byte-for-byte.",
        long,
        value_enum,
    )]
    pub style: StyleArg,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    pub(crate) fn printer_options(&self) -> PrinterOptions {
        PrinterOptions {
            indent_width: self.indent_width,
            style: self.style.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum StyleArg {
    Canonical,
    Legacy,
}
impl std::convert::From<StyleArg> for PrintStyle {
    fn from(style: StyleArg) -> PrintStyle {
        match style {
            StyleArg::Canonical => PrintStyle::Canonical,
            StyleArg::Legacy => PrintStyle::Legacy,
        }
    }
}
