use console::style;
use moksha_walletapi::model::{BalanceResult, PayResult, ReceiveResult, SendResult};
use num_format::{Locale, ToFormattedString};
use qrcode::{render::unicode, QrCode};
use tracing_subscriber::{prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so that tokens and invoices on stdout can be piped.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

pub fn format_sat(amount: u64) -> String {
    format!("{} (sat)", amount.to_formatted_string(&Locale::en))
}

pub fn balance_lines(result: &BalanceResult) -> Vec<String> {
    let mut lines = vec![format!(
        "Balance: {}",
        style(format_sat(result.balance)).cyan()
    )];

    if !result.mints.is_empty() {
        let mut mints = result.mints.keys().collect::<Vec<_>>();
        mints.sort();
        lines.push(format!(
            "You have tokens from {} mints",
            style(mints.len()).cyan()
        ));
        lines.extend(mints.into_iter().map(|mint| format!(" - {mint}")));
    }
    lines
}

pub fn send_lines(amount: u64, result: &SendResult) -> Vec<String> {
    let mut lines = vec![format!("Result {}:\n{}", format_sat(amount), result.token)];
    if let Some(ref npub) = result.npub {
        lines.push(format!("Sent to {}", style(npub).cyan()));
    }
    lines.push(format!("Balance: {}", style(format_sat(result.balance)).cyan()));
    lines
}

pub fn receive_lines(result: &ReceiveResult) -> Vec<String> {
    vec![
        format!(
            "Received {}",
            format_sat(result.balance.saturating_sub(result.initial_balance))
        ),
        format!("Balance: {}", style(format_sat(result.balance)).cyan()),
    ]
}

pub fn pay_lines(result: &PayResult) -> Vec<String> {
    vec![
        "Invoice has been paid".to_owned(),
        format!(
            "amount {} + fee {} = {}",
            result.amount.to_formatted_string(&Locale::en),
            result.fee.to_formatted_string(&Locale::en),
            format_sat(result.amount_with_fee)
        ),
    ]
}

pub fn qr_code(payment_request: &str) -> anyhow::Result<String> {
    Ok(QrCode::new(payment_request)?
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .build())
}
