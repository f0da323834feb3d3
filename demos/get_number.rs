mod common;

use supersms::{ANY, GetNumber, SuperSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let client = SuperSmsClient::new(common::api_key()?);

    let pid = common::arg(1, "pid")?;
    let channel = std::env::args().nth(2).unwrap_or_else(|| ANY.to_owned());
    let country = std::env::args().nth(3).unwrap_or_else(|| ANY.to_owned());

    let detail = client
        .get_number(GetNumber::new(channel, country, pid))
        .await?;

    println!(
        "status: {:?}, id: {:?}, phone: {:?}, extra: {:?}",
        detail.status, detail.id, detail.phone, detail.extra
    );

    Ok(())
}
