use crate::core::domain::{Configuration, LogFormat};

pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false);
    match config.log_format {
        LogFormat::Json => {
            // log collectors add their own colors and ingestion time
            builder
                .with_ansi(false)
                .json()
                .init();
        }
        LogFormat::Text => {
            builder.init();
        }
    }
}
