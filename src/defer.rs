//! Scope-exit actions run last-in, first-out.
//!
//! A [`DeferStack`] owns the output sink so that both the scope body and the
//! deferred actions can write to it. Arguments are captured when an action is
//! registered, by moving them into the closure.

use std::io::{self, Write};

use tracing::{debug, warn};

type Action<'a, W> = Box<dyn FnOnce(&mut W) -> io::Result<()> + 'a>;

pub struct DeferStack<'a, W: Write> {
    out: W,
    actions: Vec<Action<'a, W>>,
}

impl<'a, W: Write> DeferStack<'a, W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            actions: Vec::new(),
        }
    }

    /// Sink used by the scope body.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Register an action to run when the scope ends.
    pub fn defer<F>(&mut self, action: F)
    where
        F: FnOnce(&mut W) -> io::Result<()> + 'a,
    {
        self.actions.push(Box::new(action));
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.actions.len()
    }

    /// Normal scope exit: run every action. All actions run even if one
    /// fails; the first failure is returned.
    pub fn finish(mut self) -> io::Result<()> {
        self.unwind()
    }

    fn unwind(&mut self) -> io::Result<()> {
        let mut first_err = None;
        while let Some(action) = self.actions.pop() {
            if let Err(err) = action(&mut self.out) {
                first_err.get_or_insert(err);
            }
        }
        debug!("scope-exit stack unwound");
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<W: Write> Drop for DeferStack<'_, W> {
    fn drop(&mut self) {
        if self.actions.is_empty() {
            return;
        }
        debug!(pending = self.actions.len(), "unwinding scope-exit stack on early exit");
        if let Err(err) = self.unwind() {
            warn!(error = %err, "scope-exit action failed during unwind");
        }
    }
}
