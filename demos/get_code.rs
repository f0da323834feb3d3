mod common;

use supersms::{GetCode, SuperSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let client = SuperSmsClient::new(common::api_key()?);

    let task_id: i64 = common::arg(1, "task id")?.parse()?;
    let detail = client.get_code(GetCode::new(task_id)).await?;

    println!(
        "status: {:?}, code: {:?}, extra: {:?}",
        detail.status, detail.code, detail.extra
    );

    Ok(())
}
