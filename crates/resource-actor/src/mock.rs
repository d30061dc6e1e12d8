//! Expectation-based mock for testing code that talks to actors.
//!
//! [`MockClient<T>`] speaks the same wire protocol as a real actor: it hands
//! out ordinary [`ResourceClient`]s, and a background task answers each
//! request from a FIFO queue of expectations. That makes it possible to test
//! a hook or a client wrapper in isolation - including failure injection
//! (`return_err`) that would be awkward to provoke with a real actor.
//!
//! ```ignore
//! let mut mock = MockClient::<Course>::new();
//! mock.expect_delete_many().return_ok(2);
//!
//! let client = mock.client();
//! // ... exercise the code under test ...
//! mock.verify(); // all expectations consumed
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A queued expectation: which request is expected next, and what to answer.
/// Ids are recorded for readability at the call site; the responder matches
/// on operation kind and queue order.
#[allow(dead_code)]
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Find {
        response: Result<Vec<T>, FrameworkError>,
    },
    DeleteMany {
        response: Result<usize, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock actor endpoint with fluent expectation builders.
///
/// Expectations are consumed strictly in order; an unexpected request (or a
/// request arriving when the queue is empty) panics the responder task,
/// which surfaces as a hung or failed test.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with an empty expectation queue.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Find { respond_to, .. },
                        Some(Expectation::Find { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::DeleteMany { respond_to, .. },
                        Some(Expectation::DeleteMany { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response, .. }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_find(&mut self) -> FindExpectationBuilder<T> {
        FindExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_delete_many(&mut self) -> DeleteManyExpectationBuilder<T> {
        DeleteManyExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("expectation queue poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

macro_rules! push_expectation {
    ($self:ident, $variant:expr) => {{
        let mut exps = $self
            .expectations
            .lock()
            .expect("expectation queue poisoned");
        exps.push_back($variant);
    }};
}

pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        push_expectation!(self, Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push_expectation!(
            self,
            Expectation::Create {
                response: Err(error)
            }
        );
    }
}

pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        push_expectation!(
            self,
            Expectation::Get {
                id: self.id,
                response: Ok(value)
            }
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push_expectation!(
            self,
            Expectation::Get {
                id: self.id,
                response: Err(error)
            }
        );
    }
}

pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        push_expectation!(self, Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push_expectation!(
            self,
            Expectation::List {
                response: Err(error)
            }
        );
    }
}

pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, updated: T) {
        push_expectation!(
            self,
            Expectation::Update {
                id: self.id,
                response: Ok(updated)
            }
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push_expectation!(
            self,
            Expectation::Update {
                id: self.id,
                response: Err(error)
            }
        );
    }
}

pub struct DeleteExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        push_expectation!(
            self,
            Expectation::Delete {
                id: self.id,
                response: Ok(())
            }
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push_expectation!(
            self,
            Expectation::Delete {
                id: self.id,
                response: Err(error)
            }
        );
    }
}

pub struct FindExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> FindExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        push_expectation!(self, Expectation::Find { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push_expectation!(
            self,
            Expectation::Find {
                response: Err(error)
            }
        );
    }
}

pub struct DeleteManyExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> DeleteManyExpectationBuilder<T> {
    pub fn return_ok(self, removed: usize) {
        push_expectation!(
            self,
            Expectation::DeleteMany {
                response: Ok(removed)
            }
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push_expectation!(
            self,
            Expectation::DeleteMany {
                response: Err(error)
            }
        );
    }
}

pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        push_expectation!(
            self,
            Expectation::Action {
                id: self.id,
                response: Ok(result)
            }
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push_expectation!(
            self,
            Expectation::Action {
                id: self.id,
                response: Err(error)
            }
        );
    }
}
