mod account;
mod client;
mod conf;
mod display;
mod error;
mod prelude;
mod transfer;

use crate::prelude::*;

#[derive(Parser)]
#[command(version, about = "FasaPay CLI")]
struct Cli {
    #[arg(
        long = "json",
        global = true,
        help = "Print machine readable JSON instead of formatted text"
    )]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Show the balances of the configured FasaPay account")]
    Balances(account::BalancesArgs),
    #[command(about = "Look up FasaPay accounts by account number")]
    Accounts(account::AccountsArgs),
    #[command(about = "Send a transfer from the configured FasaPay account")]
    Transfer(transfer::TransferArgs),
    #[command(about = "List the transaction history of the configured account")]
    History(transfer::HistoryArgs),
    #[command(about = "Fetch details of transactions by batch number or reference")]
    Details(transfer::DetailsArgs),
    #[command(about = "Manage FasaPay CLI configuration")]
    Conf(conf::ConfCommand),
}

#[tokio::main]
async fn main() {
    env_logger::init();

    // Customize parsing error handling.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // These 2 are "not real errors" that are used to stop the execution
            // to display the CLI help or version.
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    println!("{}", e);

                    std::process::exit(0);
                }
                _ => (),
            }

            eprintln!(
                "{ballot} {error}",
                ballot = "✘".red().bold(),
                error = FasapayCliError::SyntaxError(e)
            );

            std::process::exit(1);
        }
    };

    JSON_MODE.store(cli.json, Ordering::Relaxed);

    // Send each sub-command to the respective handler.
    let result = match cli.command {
        Command::Balances(args) => account::handle_balances(args).await,
        Command::Accounts(args) => account::handle_accounts(args).await,
        Command::Transfer(args) => transfer::handle_transfer(args).await,
        Command::History(args) => transfer::handle_history(args).await,
        Command::Details(args) => transfer::handle_details(args).await,
        Command::Conf(conf) => conf::handle(conf).await,
    };

    // Handle any errors that occurred during command execution.
    if let Err(e) = result {
        eprintln!("{ballot} {e}", ballot = "✘".red().bold());

        std::process::exit(1);
    }
}
