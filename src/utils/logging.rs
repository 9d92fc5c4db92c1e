use crate::core::domain::{Configuration, parse_log_level, RuntimeMode};
use crate::core::library::LibraryResult;

// Lambda output is JSON for CloudWatch; local runs keep the human readable format.
pub fn setup_tracing(config: &Configuration) -> LibraryResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_log_level(config.log_level.as_str())?)
        // disable printing the name of the module in every log line.
        .with_target(false);
    let res = match config.runtime {
        RuntimeMode::Lambda => builder
            // ANSI color codes show up in a confusing manner in CloudWatch logs.
            .with_ansi(false)
            // CloudWatch adds the ingestion time.
            .without_time()
            .json()
            .try_init(),
        RuntimeMode::Local => builder.try_init(),
    };
    if let Err(err) = res {
        eprintln!("tracing subscriber already installed: {}", err);
    }
    Ok(())
}
