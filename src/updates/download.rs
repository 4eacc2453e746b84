use super::{DownloadHandle, SessionId, Transport, UpdateEvent, UpdateSender};
use anyhow::Result;
use std::error::Error;
use tokio::runtime::Handle;

/// Upper bound for the initial buffer reservation.
const MAX_PREALLOCATION: u64 = 64 * 1024 * 1024;

/// Fetches the update over HTTPS on the tokio runtime.
pub struct ReqwestTransport {
    runtime: Handle,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(runtime: Handle, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()?;
        Ok(Self { runtime, client })
    }

    #[cfg(test)]
    fn direct(runtime: Handle) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("unicodemoticon-test")
            .no_proxy()
            .build()
            .expect("test client");
        Self { runtime, client }
    }
}

impl Transport for ReqwestTransport {
    fn fetch(&self, session: SessionId, url: &str, events: UpdateSender) -> DownloadHandle {
        let client = self.client.clone();
        let url = url.to_string();

        let task = self.runtime.spawn(async move {
            let result = fetch_body(&client, &url, session, &events)
                .await
                .map_err(|e| error_chain(&e));
            if let Err(e) = &result {
                log::error!("Download of {} failed: {}", url, e);
            }
            let _ = events.send(UpdateEvent::Finished { session, result });
        });

        DownloadHandle::new(task.abort_handle())
    }
}

async fn fetch_body(
    client: &reqwest::Client,
    url: &str,
    session: SessionId,
    events: &UpdateSender,
) -> reqwest::Result<Vec<u8>> {
    let mut response = client.get(url).send().await?.error_for_status()?;
    let total = response.content_length().unwrap_or(0);
    log::debug!("Update response: {} bytes announced", total);

    let mut body = Vec::with_capacity(total.min(MAX_PREALLOCATION) as usize);
    let _ = events.send(UpdateEvent::Progress { session, received: 0, total });

    while let Some(chunk) = response.chunk().await? {
        body.extend_from_slice(&chunk);
        let _ = events.send(UpdateEvent::Progress {
            session,
            received: body.len() as u64,
            total,
        });
    }

    Ok(body)
}

/// Flattens an error and its sources, so TLS causes reach the dialog.
fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
