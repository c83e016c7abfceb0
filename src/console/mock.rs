use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::{bail, Result};

use crate::console::{Console, Message, Prompt};

/// Console fed from a canned script, recording everything the game says.
/// Clones share their state so tests can keep a handle while the game
/// owns another.
#[derive(Clone)]
pub struct ScriptedConsole {
    script: Rc<RefCell<VecDeque<String>>>,
    said: Rc<RefCell<Vec<Message>>>,
    asked: Rc<RefCell<Vec<Prompt>>>,
}

impl ScriptedConsole {
    pub fn new<S: Into<String>>(script: impl IntoIterator<Item = S>) -> Self {
        ScriptedConsole {
            script: Rc::new(RefCell::new(script.into_iter().map(Into::into).collect())),
            said: Rc::new(RefCell::new(Vec::new())),
            asked: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::take(&mut *self.said.borrow_mut())
    }

    pub fn said(&self) -> Vec<Message> {
        self.said.borrow().clone()
    }

    pub fn asked(&self) -> Vec<Prompt> {
        self.asked.borrow().clone()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.said.borrow().iter().any(|m| m == message)
    }

    pub fn count_messages(&self, predicate: impl Fn(&Message) -> bool) -> usize {
        self.said.borrow().iter().filter(|m| predicate(m)).count()
    }

    pub fn count_prompts(&self, prompt: &Prompt) -> usize {
        self.asked.borrow().iter().filter(|p| *p == prompt).count()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, message: &Message) {
        self.said.borrow_mut().push(message.clone());
    }

    fn ask(&mut self, prompt: &Prompt) -> Result<String> {
        self.asked.borrow_mut().push(prompt.clone());
        match self.script.borrow_mut().pop_front() {
            Some(line) => Ok(line),
            None => bail!("the script ran out of input at {:?}", prompt),
        }
    }
}
