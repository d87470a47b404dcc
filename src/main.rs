use clap::Parser;
use miette::Result;
use pantry::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => pantry::cli::commands::init::run(args),
        Commands::Flavor(cmd) => pantry::cli::commands::flavor::run(cmd, &cli.global),
        Commands::Ingredient(cmd) => pantry::cli::commands::ingredient::run(cmd, &cli.global),
        Commands::Utensil(cmd) => pantry::cli::commands::utensil::run(cmd, &cli.global),
        Commands::Employee(cmd) => pantry::cli::commands::employee::run(cmd, &cli.global),
        Commands::Supplier(cmd) => pantry::cli::commands::supplier::run(cmd, &cli.global),
        Commands::Dashboard(args) => pantry::cli::commands::dashboard::run(args, &cli.global),
        Commands::Alerts(args) => pantry::cli::commands::alerts::run(args, &cli.global),
        Commands::Import(args) => pantry::cli::commands::import::run(args),
        Commands::Validate(args) => pantry::cli::commands::validate::run(args),
        Commands::Completions(args) => pantry::cli::commands::completions::run(args),
    }
}
