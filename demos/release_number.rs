mod common;

use supersms::{ReleaseNumber, SuperSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let client = SuperSmsClient::new(common::api_key()?);

    let phone = common::arg(1, "phone")?;
    let detail = client.release_number(ReleaseNumber::new(phone)).await?;

    println!("status: {:?}, extra: {:?}", detail.status, detail.extra);

    Ok(())
}
