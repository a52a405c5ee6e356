use clap::Parser;
use std::env;
use std::process::ExitCode;
use tracing::debug;

use uniopt::args::Args;
use uniopt::config::{CONFIG_FILE, Config, find_config, load_config};
use uniopt::error::UnioptError;
use uniopt::output::{Tables, format_output};
use uniopt::{ShortOpts, get, get_long_with};

const DEFAULT_NAME: &str = "uniopt";

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => return fail(args.scan.name.as_deref().unwrap_or(DEFAULT_NAME), &e),
    };
    let name = program_name(&args, &config).to_string();

    match run(&args, config, &name) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&name, &e),
    }
}

fn fail(name: &str, e: &UnioptError) -> ExitCode {
    debug!(error = %e, "scan failed");
    eprintln!("{name}: {e}");
    ExitCode::FAILURE
}

/// `--name`, then the config file's `name`, then the binary's own name.
fn program_name<'a>(args: &'a Args, config: &'a Config) -> &'a str {
    args.scan
        .name
        .as_deref()
        .or(config.name.as_deref())
        .unwrap_or(DEFAULT_NAME)
}

fn run(args: &Args, config: Config, name: &str) -> Result<String, UnioptError> {
    let optstring = args
        .table
        .optstring
        .as_deref()
        .or(config.optstring.as_deref())
        .unwrap_or_default();
    let short = ShortOpts::parse(optstring);

    let mut long = config.long;
    long.extend(args.table.long.iter().cloned());

    let argv = args.scan.argv(name);
    debug!(
        short = short.len(),
        long = long.len(),
        args = argv.len(),
        "scanning"
    );

    let parsed = if long.is_empty() {
        get(&argv, &short)?
    } else {
        get_long_with(&argv, &short, &long)?
    };
    debug!(flags = parsed.flags.len(), optind = parsed.optind, "scan finished");

    let mut tables_short = ShortOpts::from_long(&long);
    tables_short.extend(&short);
    let tables = Tables {
        short: &tables_short,
        long: &long,
    };
    let format = args.format.or(config.format).unwrap_or_default();

    Ok(format_output(format, &tables, &parsed)?)
}

fn resolve_config(args: &Args) -> Result<Config, UnioptError> {
    if let Some(path) = &args.config {
        return Ok(load_config(path)?);
    }
    if args.no_config {
        return Ok(Config::default());
    }

    let found = env::current_dir().ok().and_then(|cwd| find_config(&cwd, CONFIG_FILE));
    match found {
        Some(path) => {
            debug!(path = %path.display(), "using config file");
            Ok(load_config(&path)?)
        }
        None => Ok(Config::default()),
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
