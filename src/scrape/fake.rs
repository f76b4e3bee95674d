//! In-memory [`JsonSource`] for driver and command tests.

use crate::{
    error::{NhlError, Result},
    nhl::{Endpoint, JsonSource},
};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// Serves canned documents; anything not registered is a 404.
#[derive(Default)]
pub(crate) struct FakeSource {
    docs: HashMap<Endpoint, Value>,
    failures: RefCell<HashMap<Endpoint, VecDeque<u16>>>,
    requests: RefCell<Vec<Endpoint>>,
}

impl FakeSource {
    pub(crate) fn with(mut self, endpoint: Endpoint, doc: Value) -> Self {
        self.docs.insert(endpoint, doc);
        self
    }

    /// Fail the next requests for `endpoint` with these statuses, in order.
    pub(crate) fn failing(self, endpoint: Endpoint, statuses: &[u16]) -> Self {
        self.failures
            .borrow_mut()
            .insert(endpoint, statuses.iter().copied().collect());
        self
    }

    pub(crate) fn requests(&self) -> Vec<Endpoint> {
        self.requests.borrow().clone()
    }
}

impl JsonSource for FakeSource {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value> {
        self.requests.borrow_mut().push(*endpoint);
        let url = format!("fake://{endpoint:?}");
        if let Some(status) = self
            .failures
            .borrow_mut()
            .get_mut(endpoint)
            .and_then(VecDeque::pop_front)
        {
            return Err(NhlError::Status { status, url });
        }
        self.docs
            .get(endpoint)
            .cloned()
            .ok_or(NhlError::NotFound { url })
    }
}
