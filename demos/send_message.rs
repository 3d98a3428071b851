use std::io;

use smsfly::{ApiKey, ApiResponse, SendMessage, SmsFlyClient, SmsMessage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("SMSFLY_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSFLY_API_KEY environment variable is required",
        )
    })?;
    let recipient = std::env::var("SMSFLY_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSFLY_RECIPIENT environment variable is required",
        )
    })?;
    let text = std::env::var("SMSFLY_TEXT")
        .unwrap_or_else(|_| "Hello from the smsfly demo.".to_owned());
    let source = std::env::var("SMSFLY_SOURCE").unwrap_or_else(|_| "InfoCenter".to_owned());

    let client = SmsFlyClient::new(ApiKey::new(api_key));
    let message = SendMessage {
        recipient,
        channels: vec!["sms".to_owned()],
        viber: None,
        sms: Some(SmsMessage {
            source,
            ttl: 5,
            flash: None,
            text,
        }),
    };

    match client.send_message(message).await? {
        ApiResponse::Success(resp) => {
            println!("accepted at {}: messageID={}", resp.date, resp.data.message_id);
            if let Some(sms) = resp.data.sms {
                println!("sms: status={}, cost={}", sms.status, sms.cost);
            }
        }
        ApiResponse::Error(err) => {
            eprintln!("rejected: code={}, description={}", err.code, err.description);
        }
    }

    Ok(())
}
