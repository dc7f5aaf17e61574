/// Book-keeping for a single outstanding animation-frame request.
///
/// Callers ask [`needs_request`](Self::needs_request) before scheduling,
/// record the returned handle with [`requested`](Self::requested), and
/// clear it from inside the callback with [`fired`](Self::fired). Once
/// [`dispose`](Self::dispose) has run no further requests are allowed and
/// the caller gets back the handle it still has to cancel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingFrame {
    id: Option<i32>,
    disposed: bool,
}

impl PendingFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn needs_request(&self) -> bool {
        !self.disposed && self.id.is_none()
    }

    pub fn requested(&mut self, id: i32) {
        if !self.disposed {
            self.id = Some(id);
        }
    }

    pub fn fired(&mut self) {
        self.id = None;
    }

    pub fn pending(&self) -> Option<i32> {
        self.id
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Stop accepting requests; returns the handle still in flight, if any.
    pub fn dispose(&mut self) -> Option<i32> {
        self.disposed = true;
        self.id.take()
    }
}
