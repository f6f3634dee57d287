use alpaca_client::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let account_id = env::args()
        .nth(1)
        .ok_or("usage: get_account <account-uuid>")?;

    let client = BrokerClient::new(Config::new())?;
    info!("Fetching account {}", account_id);

    match client.get_account_by_id(account_id.as_str()).await? {
        Payload::Model(account) => {
            info!(
                "Account {} ({}) status={} equity={}",
                account.account_number, account.id, account.status, account.last_equity
            );
            for agreement in &account.agreements {
                info!("  signed {} at {}", agreement.agreement, agreement.signed_at);
            }
        }
        Payload::Raw(raw) => info!("Raw account: {}", raw),
    }

    Ok(())
}
