//! Per-connection UI sessions.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use sitegen_bundle::Bundle;
use sitegen_client::{GenerateError, Generator};
use sitegen_ui::{Completion, GeneratorPage, Submission, TemplateEngine};
use tokio::task::{JoinError, JoinHandle};

use crate::websocket::{ClientEvent, ServerMessage};

/// Result of handling one client event.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    /// Messages to push to the page, in order
    pub messages: Vec<ServerMessage>,

    /// Generation call to start, if any
    pub submission: Option<Submission>,
}

/// UI state of one page view.
///
/// Holds the generator page and turns events into messages for the page.
/// Performs no I/O itself.
pub struct Session {
    page: GeneratorPage,
    templates: Arc<TemplateEngine>,
}

impl Session {
    pub fn new(templates: Arc<TemplateEngine>) -> Self {
        Self {
            page: GeneratorPage::new(),
            templates,
        }
    }

    pub fn page(&self) -> &GeneratorPage {
        &self.page
    }

    /// Apply an event from the page.
    pub fn handle_event(&mut self, event: ClientEvent) -> Reaction {
        match event {
            ClientEvent::Submit { prompt } => {
                self.page.set_prompt(prompt);
                match self.page.submit() {
                    Some(submission) => Reaction {
                        messages: self.render().into_iter().collect(),
                        submission: Some(submission),
                    },
                    None => Reaction::default(),
                }
            }
            ClientEvent::SelectTab { tab } => {
                if !self.page.select_tab(tab) {
                    tracing::debug!("Ignoring tab switch to {} without a preview", tab);
                    return Reaction::default();
                }
                Reaction {
                    messages: self.render().into_iter().collect(),
                    submission: None,
                }
            }
        }
    }

    /// Apply the outcome of the outstanding generation call.
    pub fn finish(&mut self, outcome: Result<Bundle, GenerateError>) -> Vec<ServerMessage> {
        let mut messages = Vec::with_capacity(2);

        if let Completion::Failed { alert } = self.page.finish(outcome) {
            messages.push(ServerMessage::Alert { message: alert });
        }
        messages.extend(self.render());

        messages
    }

    fn render(&self) -> Option<ServerMessage> {
        match self.templates.render_app(&self.page) {
            Ok(html) => Some(ServerMessage::Render { html }),
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        }
    }
}

/// Drive a session over a WebSocket until the page goes away.
///
/// The generation call runs as its own task so tab switches are still
/// handled while it is outstanding. Closing the socket aborts it.
pub async fn run_session(
    mut socket: WebSocket,
    generator: Arc<dyn Generator>,
    templates: Arc<TemplateEngine>,
) {
    let mut session = Session::new(templates);
    let mut pending: Option<JoinHandle<Result<Bundle, GenerateError>>> = None;

    if send(&mut socket, &ServerMessage::Connected).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            incoming = socket.recv() => {
                let text = match incoming {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        tracing::debug!("Session socket error: {}", e);
                        break;
                    }
                };

                let event = match serde_json::from_str::<ClientEvent>(text.as_str()) {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::warn!("Ignoring malformed session message: {}", e);
                        continue;
                    }
                };

                let reaction = session.handle_event(event);
                if let Some(submission) = reaction.submission {
                    tracing::info!("Generating with {}", generator.describe());
                    let generator = Arc::clone(&generator);
                    pending = Some(tokio::spawn(async move {
                        generator.generate(&submission.prompt).await
                    }));
                }

                if send_all(&mut socket, reaction.messages).await.is_err() {
                    break;
                }
            }

            joined = wait_for(&mut pending) => {
                pending = None;
                let outcome = joined.unwrap_or_else(|e| Err(GenerateError::Other(e.to_string())));
                if outcome.is_ok() {
                    tracing::info!("Generation finished");
                }

                let messages = session.finish(outcome);
                if send_all(&mut socket, messages).await.is_err() {
                    break;
                }
            }
        }
    }

    if let Some(handle) = pending {
        handle.abort();
    }
    tracing::debug!("Session closed");
}

/// Resolve when the outstanding task does; never when there is none.
async fn wait_for<T>(pending: &mut Option<JoinHandle<T>>) -> Result<T, JoinError> {
    match pending {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

async fn send(socket: &mut WebSocket, msg: &ServerMessage) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}

async fn send_all(socket: &mut WebSocket, messages: Vec<ServerMessage>) -> Result<(), axum::Error> {
    for msg in &messages {
        send(socket, msg).await?;
    }
    Ok(())
}
