//! Vote handler.
//!
//! Responsibilities:
//! - Resolve the voter identity (cookie or fresh)
//! - GET: render the ballot with nothing selected
//! - POST: require `vote`, append one record to the queue, count it, render
//!   the ballot with the cast vote selected
//! - Set the identity cookie on every successful response
//!
//! Ordering: the queue append happens first and the counter is only bumped
//! after it succeeds, so `vote_total` never counts a vote the queue refused.

use std::time::Instant;

use axum::{
    extract::{rejection::FormRejection, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    Form,
};
use vote_core::error::{Result, VoteError};
use vote_core::{VoteRecord, VoterId};

use crate::app_state::AppState;
use crate::transport::error::ApiError;
use crate::transport::identity;
use crate::transport::page::{render_page, PageContext};

/// Raw form pairs in body order. Repeated keys are kept so the first `vote`
/// wins instead of failing deserialization.
pub type VoteForm = Vec<(String, String)>;

pub async fn show(
    State(app): State<AppState>,
    headers: HeaderMap,
) -> std::result::Result<Response, ApiError> {
    let (voter, fresh) = identity::resolve(&headers);
    if fresh {
        tracing::debug!(voter = %voter, "issued new voter id");
    }
    Ok(respond(&app, &voter, None)?)
}

pub async fn submit(
    State(app): State<AppState>,
    headers: HeaderMap,
    form: std::result::Result<Form<VoteForm>, FormRejection>,
) -> std::result::Result<Response, ApiError> {
    let (voter, _) = identity::resolve(&headers);

    let vote = match read_vote(form) {
        Ok(v) => v,
        Err((reason, e)) => {
            app.metrics().bad_requests.inc(&[("reason", reason)]);
            return Err(e.into());
        }
    };

    cast(&app, &voter, &vote).await?;
    Ok(respond(&app, &voter, Some(&vote))?)
}

/// First `vote` value in the form. Errors carry the `reason` metric label.
fn read_vote(
    form: std::result::Result<Form<VoteForm>, FormRejection>,
) -> std::result::Result<String, (&'static str, VoteError)> {
    let Form(pairs) = form.map_err(|e| {
        (
            "unreadable_form",
            VoteError::BadRequest(format!("unreadable form: {e}")),
        )
    })?;
    pairs
        .into_iter()
        .find_map(|(k, v)| (k == "vote").then_some(v))
        .ok_or_else(|| {
            (
                "missing_vote",
                VoteError::BadRequest("missing form field `vote`".into()),
            )
        })
}

/// Append the vote, then count it.
pub async fn cast(app: &AppState, voter: &VoterId, vote: &str) -> Result<()> {
    tracing::info!("Received vote for {vote}");

    let record = VoteRecord::new(voter.clone(), vote);
    if let Err(e) = app.queue().push(&record).await {
        if matches!(e, VoteError::QueueUnavailable(_)) {
            app.metrics().queue_errors.inc(&[]);
        }
        return Err(e);
    }

    app.metrics().record_vote(vote);
    Ok(())
}

fn respond(app: &AppState, voter: &VoterId, vote: Option<&str>) -> Result<Response> {
    let opts = &app.cfg().options;
    let html = render_page(&PageContext {
        option_a: &opts.a,
        option_b: &opts.b,
        hostname: app.hostname(),
        vote,
    });
    let cookie = identity::set_cookie(voter)?;
    Ok(([cookie], Html(html)).into_response())
}

/// Observe processing time for every ballot request, failures included.
pub async fn track_request_time(
    State(app): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let started = Instant::now();
    let res = next.run(req).await;
    app.metrics().observe_request(method.as_str(), started.elapsed());
    res
}
