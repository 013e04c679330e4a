use std::time::Duration;

use reqwest::Client;

// Only the data feed carries an explicit upstream timeout; the chat path
// stays on the transport defaults.
pub fn chat_client() -> Client {
    Client::new()
}

pub fn data_feed_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}
