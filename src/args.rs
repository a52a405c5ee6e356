use crate::output::OutputFormat;
use crate::scan::ScanArgs;
use crate::table::TableArgs;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parse an argument vector with Unicode-aware getopt/getopt_long rules"
)]
pub struct Args {
    #[arg(short, long, value_enum, help = "Output format [default: shell]")]
    pub format: Option<OutputFormat>,

    #[arg(long, value_name = "FILE", help = "Read option tables from this file")]
    pub config: Option<PathBuf>,

    #[arg(long, conflicts_with = "config", help = "Do not look for uniopt.toml")]
    pub no_config: bool,

    #[command(flatten)]
    pub table: TableArgs,

    #[command(flatten)]
    pub scan: ScanArgs,
}
