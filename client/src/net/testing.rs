//! Scripted `HttpClient` for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use super::error::ApiError;
use super::http::{ApiRequest, ApiResponse, HttpClient};

#[derive(Default)]
struct MockInner {
    replies: VecDeque<Result<ApiResponse, ApiError>>,
    requests: Vec<ApiRequest>,
    yield_before_reply: bool,
}

/// Replies are consumed in order; once exhausted every call fails with a
/// network error.
#[derive(Clone, Default)]
pub(crate) struct MockClient {
    inner: Rc<RefCell<MockInner>>,
}

impl MockClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make every call suspend once before taking its reply so that
    /// concurrently polled calls are all in flight together.
    pub(crate) fn yielding(self) -> Self {
        self.inner.borrow_mut().yield_before_reply = true;
        self
    }

    pub(crate) fn reply(&self, status: u16, body: serde_json::Value) -> &Self {
        self.inner.borrow_mut().replies.push_back(Ok(ApiResponse::new(status, body.to_string())));
        self
    }

    pub(crate) fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.inner.borrow_mut().replies.push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub(crate) fn fail(&self, err: ApiError) -> &Self {
        self.inner.borrow_mut().replies.push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }
}

impl HttpClient for MockClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let yield_first = {
            let mut inner = self.inner.borrow_mut();
            inner.requests.push(request);
            inner.yield_before_reply
        };
        if yield_first {
            YieldOnce::default().await;
        }
        self.inner
            .borrow_mut()
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

#[derive(Default)]
struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
