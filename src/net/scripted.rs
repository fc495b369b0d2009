//! Scripted in-memory transport for unit tests.
//!
//! Replies are queued per request path and consumed in order. A reply can be
//! gated behind a oneshot channel so tests control when it resolves, which is
//! how overlapping requests are staged.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Transport};

type Outcome = Result<ApiResponse, ApiError>;

enum Reply {
    Ready(Outcome),
    Gated(oneshot::Receiver<Outcome>),
}

/// An upload the transport received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedUpload {
    pub url: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
struct Script {
    replies: HashMap<String, VecDeque<Reply>>,
    calls: Vec<String>,
    urls: Vec<String>,
    requests: Vec<ApiRequest>,
    uploads: Vec<RecordedUpload>,
    upload_status: Option<u16>,
}

#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    /// Queue a response for the next request to `path`.
    pub fn reply(&self, path: &str, status: u16, body: &str) {
        self.push(
            path,
            Reply::Ready(Ok(ApiResponse {
                status,
                body: body.to_owned(),
            })),
        );
    }

    /// Queue a transport failure for the next request to `path`.
    pub fn fail(&self, path: &str, err: ApiError) {
        self.push(path, Reply::Ready(Err(err)));
    }

    /// Queue a reply for `path` that resolves only once the returned sender fires.
    pub fn gate(&self, path: &str) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.push(path, Reply::Gated(rx));
        tx
    }

    /// Status returned for uploads; defaults to 200.
    pub fn set_upload_status(&self, status: u16) {
        self.script.borrow_mut().upload_status = Some(status);
    }

    /// `"Get /path?query"` for every request sent, in order.
    pub fn calls(&self) -> Vec<String> {
        self.script.borrow().calls.clone()
    }

    /// Absolute URLs of every request sent, in order.
    pub fn urls(&self) -> Vec<String> {
        self.script.borrow().urls.clone()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script.borrow().requests.clone()
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.script.borrow().uploads.clone()
    }

    /// Number of requests sent to `path`.
    pub fn count(&self, path: &str) -> usize {
        self.script
            .borrow()
            .requests
            .iter()
            .filter(|request| request.path == path)
            .count()
    }

    fn push(&self, path: &str, reply: Reply) {
        self.script
            .borrow_mut()
            .replies
            .entry(path.to_owned())
            .or_default()
            .push_back(reply);
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, url: &str, request: &ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>> {
        let reply = {
            let mut script = self.script.borrow_mut();
            script
                .calls
                .push(format!("{:?} {}", request.method, request.path_and_query()));
            script.urls.push(url.to_owned());
            script.requests.push(request.clone());
            script
                .replies
                .get_mut(&request.path)
                .and_then(VecDeque::pop_front)
        };
        let path = request.path.clone();
        async move {
            match reply {
                Some(Reply::Ready(outcome)) => outcome,
                Some(Reply::Gated(rx)) => match rx.await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(ApiError::Network(format!("gate for {path} dropped"))),
                },
                None => Err(ApiError::Network(format!("no scripted reply for {path}"))),
            }
        }
    }

    fn upload(&self, url: &str, content_type: &str, bytes: Vec<u8>) -> impl Future<Output = Result<ApiResponse, ApiError>> {
        let status = {
            let mut script = self.script.borrow_mut();
            script.uploads.push(RecordedUpload {
                url: url.to_owned(),
                content_type: content_type.to_owned(),
                bytes,
            });
            script.upload_status.unwrap_or(200)
        };
        async move {
            Ok(ApiResponse {
                status,
                body: String::new(),
            })
        }
    }
}
