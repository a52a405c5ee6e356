use crate::table::LongOpt;
use clap::Args;

#[derive(Debug, Default, Args)]
pub struct TableArgs {
    #[arg(
        short = 'o',
        long = "options",
        value_name = "OPTSTRING",
        help = "Short options to recognize (e.g. 'abc:d::')"
    )]
    pub optstring: Option<String>,

    #[arg(
        short = 'l',
        long = "long",
        value_name = "SPEC",
        help = "Long option as [S/]NAME[:|::] (repeatable)"
    )]
    pub long: Vec<LongOpt>,
}
