use clap::Args;

#[derive(Debug, Default, Args)]
pub struct ScanArgs {
    #[arg(
        long,
        short = 'n',
        value_name = "NAME",
        help = "Program name placed at index 0 of the scanned vector [default: uniopt]"
    )]
    pub name: Option<String>,

    #[arg(last = true, value_name = "ARGS", help = "Arguments to scan")]
    pub args: Vec<String>,
}

impl ScanArgs {
    /// The argument vector as the scanned program would see it, with the
    /// already resolved program name at index 0.
    pub fn argv<'s>(&'s self, name: &'s str) -> Vec<&'s str> {
        std::iter::once(name)
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}
