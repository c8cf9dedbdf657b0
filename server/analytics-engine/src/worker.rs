//! Offloaded engine worker: a background thread behind mpsc channels.
//!
//! The host sends typed requests and receives typed responses; no state is
//! shared. The worker processes one request at a time in arrival order, so a
//! single host issuing requests in sequence gets responses in the same order.
//! There are no timeouts and no cancellation — a sent request always produces
//! a response unless the worker has shut down.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::config::Config;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::types::{Request, Response};

/// Handle to a running engine worker. Dropping the handle shuts the worker
/// down; use [`WorkerHandle::shutdown`] to also join the thread.
pub struct WorkerHandle {
  request_tx: Sender<Request>,
  response_rx: Receiver<Response>,
  thread: JoinHandle<()>,
}

/// Spawn an engine worker on a background thread.
pub fn spawn(config: Config) -> WorkerHandle {
  let (request_tx, request_rx) = mpsc::channel::<Request>();
  let (response_tx, response_rx) = mpsc::channel::<Response>();

  let thread = thread::spawn(move || {
    let engine = Engine::new(config);
    // Exits when the host drops its sender, or when the host stops listening.
    for request in request_rx {
      if response_tx.send(engine.process(&request)).is_err() {
        break;
      }
    }
  });

  WorkerHandle {
    request_tx,
    response_rx,
    thread,
  }
}

impl WorkerHandle {
  /// Send a request without waiting for the response.
  pub fn send(&self, request: Request) -> Result<(), EngineError> {
    self
      .request_tx
      .send(request)
      .map_err(|_| EngineError::Worker("engine worker has shut down".into()))
  }

  /// Block until the next response arrives. `None` once the worker is gone.
  pub fn recv(&self) -> Option<Response> {
    self.response_rx.recv().ok()
  }

  /// Send a request and block for its response.
  pub fn request(&self, request: Request) -> Result<Response, EngineError> {
    self.send(request)?;
    self
      .recv()
      .ok_or_else(|| EngineError::Worker("engine worker has shut down".into()))
  }

  /// Shut down the worker and wait for the thread to exit.
  pub fn shutdown(self) {
    let WorkerHandle {
      request_tx,
      response_rx,
      thread,
    } = self;
    drop(request_tx);
    drop(response_rx);
    let _ = thread.join();
  }
}
