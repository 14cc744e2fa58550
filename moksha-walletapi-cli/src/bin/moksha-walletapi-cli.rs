use clap::{Parser, Subcommand};
use console::{style, Term};
use moksha_walletapi::{
    client::WalletApiClient,
    config::ClientConfig,
    model::{InvoiceParams, PayParams, ReceiveParams, SendParams},
};
use mokshawalletapicli::cli;
use tracing::debug;

#[derive(Parser)]
#[command(arg_required_else_help(true))]
struct Opts {
    #[clap(flatten)]
    config: ClientConfig,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone)]
enum Command {
    /// Show wallet balance
    Balance,

    /// Send tokens
    Send {
        amount: u64,
        /// Send to a nostr pubkey
        #[clap(long)]
        nostr: Option<String>,
        /// Lock tokens with a P2SH lock
        #[clap(long)]
        lock: Option<String>,
        /// Mint to send tokens from
        #[clap(long)]
        mint: Option<String>,
        /// Send without splitting tokens (`--nosplit=false` sends an explicit false)
        #[clap(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        nosplit: Option<bool>,
    },

    /// Receive tokens
    Receive {
        token: String,
        /// Unlock tokens with this lock
        #[clap(long)]
        lock: Option<String>,
        /// Receive tokens sent via nostr (`--nostr=false` sends an explicit false)
        #[clap(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        nostr: Option<bool>,
        /// Receive all pending tokens (`--all=false` sends an explicit false)
        #[clap(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true"
        )]
        all: Option<bool>,
    },

    /// Create a lightning invoice to mint tokens
    Invoice {
        amount: u64,
        /// Payment hash of an already paid invoice
        #[clap(long)]
        hash: Option<String>,
        #[clap(long)]
        mint: Option<String>,
        /// Split minted tokens into this denomination
        #[clap(long)]
        split: Option<u64>,
    },

    /// Pay Lightning invoice
    Pay {
        invoice: String,
        #[clap(long)]
        mint: Option<String>,
    },

    /// Show version and configuration
    Info,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    cli::init_tracing();

    let opts = Opts::parse();
    let term = Term::stdout();
    debug!("wallet api: {}", opts.config.base_url);

    let client = || WalletApiClient::from_config(&opts.config);

    match opts.command {
        Command::Info => {
            let version = style(env!("CARGO_PKG_VERSION")).cyan();
            let url = style(&opts.config.base_url).cyan();
            term.write_line(&format!("Version: {version}"))?;
            term.write_line(&format!("Wallet api: {url}"))?;
        }
        Command::Balance => {
            let result = client()?.balance()?;
            for line in cli::balance_lines(&result) {
                term.write_line(&line)?;
            }
        }
        Command::Send {
            amount,
            nostr,
            lock,
            mint,
            nosplit,
        } => {
            let params = SendParams {
                amount,
                nostr,
                lock,
                mint,
                nosplit,
            };
            let result = client()?.send(&params)?;
            for line in cli::send_lines(amount, &result) {
                term.write_line(&line)?;
            }
        }
        Command::Receive {
            token,
            lock,
            nostr,
            all,
        } => {
            let params = ReceiveParams {
                token,
                lock,
                nostr,
                all,
            };
            let result = client()?.receive(&params)?;
            for line in cli::receive_lines(&result) {
                term.write_line(&line)?;
            }
        }
        Command::Invoice {
            amount,
            hash,
            mint,
            split,
        } => {
            let params = InvoiceParams {
                amount,
                hash,
                mint,
                split,
            };
            let result = client()?.invoice(&params)?;
            term.write_line(&format!(
                "Pay lightning invoice to mint {}:\n\n{}",
                cli::format_sat(result.amount),
                result.invoice.pr
            ))?;
            term.write_line(&cli::qr_code(&result.invoice.pr)?)?;
            term.write_line(&format!("Hash: {}", style(&result.hash).cyan()))?;
        }
        Command::Pay { invoice, mint } => {
            let result = client()?.pay(&PayParams { invoice, mint })?;
            for line in cli::pay_lines(&result) {
                term.write_line(&line)?;
            }
        }
    }
    Ok(())
}
