// web-server/src/notes.rs
use actix::{Actor, ActorContext, AsyncContext, StreamHandler};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use askama::Template;
use chrono::{DateTime, Utc};
use common::models::note::NoteBoard;
use common::models::session::SessionClaims;
use common::NoteEvent;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::pages::NoteCardTemplate;
use crate::session;
use crate::AppState;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

pub const EXPIRED_MESSAGE: &str = "Your login has expired. Please log in again.";
const RENDER_FAILED_PROMPT: &str = "The note could not be shown. Please try again.";

/// State of one open wall page: who is looking at it and what they wrote
pub struct NotePage {
    claims: SessionClaims,
    board: NoteBoard,
}

impl NotePage {
    pub fn new(claims: SessionClaims) -> Self {
        Self {
            claims,
            board: NoteBoard::new(),
        }
    }

    pub fn board(&self) -> &NoteBoard {
        &self.board
    }

    pub fn member_name(&self) -> &str {
        &self.claims.member_name
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.claims.is_expired_at(now)
    }

    /// Append `text` as a note and describe the outcome for the page
    pub fn compose(&mut self, text: &str) -> Result<NoteEvent, askama::Error> {
        match self.board.compose(text) {
            Ok(note) => {
                let html = NoteCardTemplate {
                    id: note.id,
                    member_name: &self.claims.member_name,
                    text: &note.text,
                }
                .render()?;

                Ok(NoteEvent::Added { id: note.id, html })
            },
            Err(e) => Ok(NoteEvent::Rejected {
                prompt: e.prompt().to_string(),
            }),
        }
    }
}

/// Actor owning the socket of one open wall page.
///
/// Notes die with the actor, so a reload starts from an empty wall.
pub struct NotePageActor {
    page_id: Uuid,
    page: NotePage,
    last_heartbeat: Instant,
}

impl NotePageActor {
    pub fn new(claims: SessionClaims) -> Self {
        Self {
            page_id: Uuid::new_v4(),
            page: NotePage::new(claims),
            last_heartbeat: Instant::now(),
        }
    }

    fn heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.last_heartbeat) > CLIENT_TIMEOUT {
                tracing::warn!("Note page heartbeat timeout: {}", act.page_id);
                ctx.stop();
                return;
            }

            ctx.ping(b"");
        });
    }

    fn send_event(&self, event: &NoteEvent, ctx: &mut ws::WebsocketContext<Self>) {
        match serde_json::to_string(event) {
            Ok(json) => ctx.text(json),
            Err(e) => tracing::error!("Failed to serialize note event: {}", e),
        }
    }

    fn handle_text(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        if self.page.is_expired_at(Utc::now()) {
            tracing::info!("Login expired on note page {}", self.page_id);
            self.send_event(
                &NoteEvent::Expired {
                    message: EXPIRED_MESSAGE.to_string(),
                },
                ctx,
            );
            ctx.close(Some(ws::CloseCode::Policy.into()));
            ctx.stop();
            return;
        }

        let event = match self.page.compose(text) {
            Ok(event) => event,
            Err(e) => {
                tracing::error!("Failed to render note card: {}", e);
                NoteEvent::Rejected {
                    prompt: RENDER_FAILED_PROMPT.to_string(),
                }
            }
        };

        if let NoteEvent::Added { id, .. } = &event {
            tracing::debug!("Note {} added on page {}", id, self.page_id);
        }
        self.send_event(&event, ctx);
    }
}

impl Actor for NotePageActor {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        tracing::info!(
            "Note page opened: {} for {}",
            self.page_id,
            self.page.member_name()
        );
        self.last_heartbeat = Instant::now();
        self.heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        tracing::info!(
            "Note page closed: {}, discarding {} notes",
            self.page_id,
            self.page.board().len()
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for NotePageActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&msg);
            },
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            },
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();
                self.handle_text(&text, ctx);
            },
            Ok(ws::Message::Close(reason)) => {
                tracing::debug!("Note page {} closing: {:?}", self.page_id, reason);
                ctx.close(reason);
                ctx.stop();
            },
            Err(e) => {
                tracing::warn!("Note page {} protocol error: {}", self.page_id, e);
                ctx.stop();
            },
            _ => (),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/notes")
            .route(web::get().to(notes_ws_route))
    );
}

/// WebSocket route for an open wall page
async fn notes_ws_route(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let claims = match session::authenticate(&req, &state.auth) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!("Note page connection refused: {}", e);
            return Ok(HttpResponse::Unauthorized().finish());
        }
    };

    ws::start(NotePageActor::new(claims), &req, stream)
}
