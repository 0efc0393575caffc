use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mesa_registry::ActionQuery;
use mesa_report::{ReportFlavor, ReportOptions};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "mesa", version, about = "Service broker registry console")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List actions with node counts, health state and caching
    Actions(ListArgs),

    /// List action contracts: params, response shape, authorization
    Contracts(ListArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Registry snapshot file (.json, .yaml or .yml)
    #[arg(long, default_value = "registry.json")]
    snapshot: PathBuf,

    /// List all (offline) actions
    #[arg(short, long)]
    all: bool,

    /// Print endpoints
    #[arg(short, long)]
    details: bool,

    /// Filter actions (e.g. 'users.*')
    #[arg(short, long)]
    filter: Option<String>,

    /// Skip internal actions
    #[arg(short = 'i', long)]
    skip_internal: bool,

    /// Only local actions
    #[arg(short, long)]
    local: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl ListArgs {
    fn report_options(&self) -> ReportOptions {
        ReportOptions {
            query: ActionQuery {
                only_local: self.local,
                only_available: !self.all,
                skip_internal: self.skip_internal,
                with_endpoints: self.details,
            },
            filter: self.filter.clone(),
            styled: !self.no_color,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Actions(args) => {
            commands::list::run(ReportFlavor::Topology, &args.snapshot, &args.report_options())
        }
        Command::Contracts(args) => {
            commands::list::run(ReportFlavor::Contract, &args.snapshot, &args.report_options())
        }
    }
}
