//! Cross-page lazy sequences.
//!
//! A [`Paginator`] is a `Stream` of pages. It issues the first request with
//! the caller's seed token and keeps requesting while the previous page
//! reports a continuation token. Nothing is fetched until the stream is
//! polled.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::stream::{self, BoxStream, Stream, StreamExt};
use pin_project_lite::pin_project;
pub use ruststack_sdk_core::PageableResponse;
use tracing::{debug, warn};

enum State<T> {
    Next(Option<T>),
    Done,
}

pin_project! {
    /// Stream of pages that follows continuation tokens.
    pub struct Paginator<P, E> {
        #[pin]
        stream: BoxStream<'static, Result<P, E>>,
    }
}

impl<P, E> fmt::Debug for Paginator<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}

impl<P, E> Paginator<P, E>
where
    P: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Create a paginator.
    ///
    /// `execute` receives the token for the page to fetch (`seed` for the first
    /// page). Iteration stops after the first error, when a page has no next
    /// token, or when the service hands back the token it was just given.
    pub fn new<F>(
        seed: Option<P::Token>,
        execute: impl Fn(Option<P::Token>) -> F + Clone + Send + Sync + 'static,
    ) -> Self
    where
        F: Future<Output = Result<P, E>> + Send + 'static,
    {
        let stream = stream::unfold(State::Next(seed), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    State::Next(token) => token,
                    State::Done => return None,
                };
                match execute(token.clone()).await {
                    Ok(page) => {
                        let next_state = match page.next_token() {
                            Some(next) if token.as_ref() == Some(&next) => {
                                warn!(token = ?next, "service returned the same continuation token, stopping");
                                State::Done
                            }
                            Some(next) => {
                                debug!(token = ?next, "fetching next page");
                                State::Next(Some(next))
                            }
                            None => State::Done,
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(err) => Some((Err(err), State::Done)),
                }
            }
        });
        Self {
            stream: stream.boxed(),
        }
    }

    /// Flatten pages into a stream of items.
    ///
    /// A page error is yielded once, after which the stream ends.
    pub fn into_items<I, It>(
        self,
        extract: impl Fn(P) -> It + Send + 'static,
    ) -> BoxStream<'static, Result<I, E>>
    where
        It: IntoIterator<Item = I>,
        I: Send + 'static,
    {
        self.flat_map(move |page| {
            let items: Vec<Result<I, E>> = match page {
                Ok(page) => extract(page).into_iter().map(Ok).collect(),
                Err(err) => vec![Err(err)],
            };
            stream::iter(items)
        })
        .boxed()
    }

    /// Fetch every page and collect them, stopping at the first error.
    pub async fn collect_pages(mut self) -> Result<Vec<P>, E> {
        let mut pages = Vec::new();
        while let Some(page) = self.next().await {
            pages.push(page?);
        }
        Ok(pages)
    }
}

impl<P, E> Stream for Paginator<P, E> {
    type Item = Result<P, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}
