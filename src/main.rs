use std::env;

use anyhow::Result;
use serde_json::Value;

use vision_prompt::generate_prompt;

// usage: vision-prompt ['{"vars": {...}}']
// stdout: the context echo on the first line, then the pretty payload
fn parse_context(arg: Option<String>) -> Value {
    match arg {
        Some(raw) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
        None => Value::Object(Default::default()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // stdout carries the context echo and the payload
        .with_writer(std::io::stderr)
        .init();

    let context = parse_context(env::args().nth(1));
    let messages = generate_prompt(&context).await?;
    let payload = serde_json::to_string_pretty(&messages)?;
    println!("{payload}");
    Ok(())
}
