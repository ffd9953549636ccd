//! The command worker loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use tether_core::request::{Request, Response};

use crate::facade::CommandFacade;

/// A request paired with its one-shot reply channel.
pub(crate) struct RequestEnvelope {
    pub request: Request,
    pub reply: Sender<Response>,
}

/// Poll interval so workers notice the shutdown flag even while handles
/// keep the request channel open.
const SHUTDOWN_POLL: Duration = Duration::from_millis(50);

/// Body of one worker thread: receive, dispatch, reply, until shutdown.
pub(crate) fn worker_loop(
    facade: Arc<CommandFacade>,
    requests: Receiver<RequestEnvelope>,
    shutdown: Arc<AtomicBool>,
) {
    loop {
        if shutdown.load(Ordering::Acquire) {
            break;
        }
        match requests.recv_timeout(SHUTDOWN_POLL) {
            Ok(envelope) => {
                let op = envelope.request.op_name();
                let response = facade.dispatch(envelope.request);
                log::debug!("{op}: success={}", response.success);
                // The submitter may have given up waiting; a dead reply
                // channel is not an error.
                let _ = envelope.reply.send(response);
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}
