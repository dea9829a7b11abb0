//! igcop CLI - Inspect Information Governance Catalog asset payloads

use clap::{CommandFactory, Parser};
use log::{LevelFilter, debug};

use igcop::cli::args::GlobalOptions;
use igcop::cli::query::QuerySpec;
use igcop::cli::{self, Cli, CommandContext, Commands};
use igcop::error::Result;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);
    debug!("Global options: {:?}", opts);

    match cli.command {
        Commands::Types { base } => cli::types::run(&CommandContext::new(&opts)?, base),
        Commands::Schema { type_id, paged } => {
            cli::schema::run(&CommandContext::new(&opts)?, &type_id, paged)
        }
        Commands::Decode {
            file,
            type_id,
            strict,
        } => cli::decode::run(
            &CommandContext::new(&opts)?,
            file.as_deref(),
            type_id.as_deref(),
            strict,
        ),
        Commands::Query {
            type_id,
            properties,
            all,
            relationship,
            paging,
        } => {
            let spec = QuerySpec {
                properties: &properties,
                all,
                relationship: relationship.as_deref(),
            };
            cli::query::run(&CommandContext::new(&opts)?, &type_id, &spec, &paging)
        }
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("igcop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "igcop", &mut std::io::stdout());
            Ok(())
        }
    }
}
