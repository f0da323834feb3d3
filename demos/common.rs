use std::io;

pub fn api_key() -> Result<String, io::Error> {
    std::env::var("SUPERSMS_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SUPERSMS_API_KEY environment variable is required",
        )
    })
}

pub fn arg(index: usize, name: &str) -> Result<String, io::Error> {
    std::env::args().nth(index).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("missing argument: {name}"),
        )
    })
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "supersms=debug".into()),
        )
        .with_target(false)
        .init();
}
