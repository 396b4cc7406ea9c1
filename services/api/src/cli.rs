use crate::commands::{run_catalog, run_match, run_scrape, CatalogArgs, MatchArgs};
use crate::server;
use bonusperme::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "BonusPerMe",
    about = "Find the Italian benefits a household is eligible for, from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Match a household profile against the built-in catalog
    Match(MatchArgs),
    /// List the built-in catalog with deadline status
    Catalog(CatalogArgs),
    /// Run one catalog refresh cycle and print per-source status
    Scrape,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Match(args) => run_match(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Scrape => run_scrape().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["bonusperme-api"]).expect("parses");
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["bonusperme-api", "serve", "--port", "9090"]).expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(9090)),
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn match_flags_use_questionnaire_names() {
        let cli = Cli::try_parse_from([
            "bonusperme-api",
            "match",
            "--eta",
            "34",
            "--regione",
            "Lombardia",
            "--figli",
            "2",
            "--figli-under3",
            "1",
            "--isee",
            "10000",
            "--stato-civile",
            "sposata",
            "--affittuario",
            "--isee-simulato",
            "8000",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Match(args)) => {
                let profile = args.profile();
                assert_eq!(profile.age, 34);
                assert_eq!(profile.region, "Lombardia");
                assert_eq!(profile.children, 2);
                assert_eq!(profile.children_under_3, 1);
                assert!(profile.renter);
                assert_eq!(profile.simulated_isee, Some(8000.0));
                assert_eq!(
                    profile.marital_status,
                    bonusperme::matcher::MaritalStatus::Sposato
                );
                assert!(args.json);
            }
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn match_requires_age() {
        assert!(Cli::try_parse_from(["bonusperme-api", "match", "--isee", "1000"]).is_err());
    }
}
