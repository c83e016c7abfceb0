use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::game::definition::Question;
use crate::trivia::{FetchError, QuestionSource};

/// Question source serving a canned batch, recording how it was called.
/// Clones share their state so tests can keep a handle while the game
/// owns another.
#[derive(Clone)]
pub struct MockSource {
    batch: Vec<Question>,
    fail: bool,
    fetch_count: Rc<Cell<usize>>,
    last_request: Rc<RefCell<Option<(u32, String)>>>,
}

impl MockSource {
    pub fn new(batch: Vec<Question>) -> Self {
        MockSource {
            batch,
            fail: false,
            fetch_count: Rc::new(Cell::new(0)),
            last_request: Rc::new(RefCell::new(None)),
        }
    }

    /// A source whose every fetch fails.
    pub fn failing() -> Self {
        MockSource {
            fail: true,
            ..MockSource::new(Vec::new())
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.get()
    }

    pub fn last_request(&self) -> Option<(u32, String)> {
        self.last_request.borrow().clone()
    }
}

impl QuestionSource for MockSource {
    fn fetch(&self, limit: u32, region: &str) -> Result<Vec<Question>, FetchError> {
        self.fetch_count.set(self.fetch_count.get() + 1);
        *self.last_request.borrow_mut() = Some((limit, region.to_owned()));
        if self.fail {
            return Err(FetchError::Http {
                status: 500,
                body: "mock failure".to_owned(),
            });
        }
        Ok(self.batch.clone())
    }
}
