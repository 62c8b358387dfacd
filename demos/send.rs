//! Send one message through Postmark.
//!
//! ```text
//! POSTMARK_SERVER_TOKEN=... RUST_LOG=postmark_client=debug \
//!     cargo run --example send -- sender@example.com recipient@example.com
//! ```

use postmark_client::{Client, MessageRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = std::env::var("POSTMARK_SERVER_TOKEN")?;
    let mut args = std::env::args().skip(1);
    let (Some(from), Some(to)) = (args.next(), args.next()) else {
        eprintln!("usage: send <from> <to> [attachment...]");
        std::process::exit(2);
    };

    let mut message = MessageRequest::new()
        .from(from)
        .from_name("Postmark Demo")
        .to(to)
        .subject("Hello from postmark-client")
        .text("This message was sent by the postmark-client demo.")
        .tag("demo");
    for path in args {
        message = message.attachment(path);
    }

    let client = Client::new(token)?;
    let response = client.send(&message).await?;
    println!("Sent: {}", response["MessageID"]);
    Ok(())
}
