//! Cooperative cancellation signals.
//!
//! Cancellable computations never own their cancellation state. They poll a
//! [`CancellationSignal`] supplied when the computation is run. Any type that
//! can answer "has cancellation been requested?" can serve as a signal; this
//! module provides a shareable [`CancellationToken`] controlled by a
//! [`CancellationSource`], and [`NeverCancelled`] for runs without a token.
//!
//! # Example
//!
//! ```rust
//! use compexpr::effect::{CancellationSignal, CancellationSource};
//!
//! let source = CancellationSource::new();
//! let token = source.token();
//! assert!(!token.is_cancellation_requested());
//!
//! source.cancel();
//! assert!(token.is_cancellation_requested());
//! ```

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A poll-only source of cancellation requests.
pub trait CancellationSignal {
    /// Returns `true` once cancellation has been requested.
    fn is_cancellation_requested(&self) -> bool;
}

impl CancellationSignal for bool {
    fn is_cancellation_requested(&self) -> bool {
        *self
    }
}

impl CancellationSignal for Cell<bool> {
    fn is_cancellation_requested(&self) -> bool {
        self.get()
    }
}

impl CancellationSignal for AtomicBool {
    fn is_cancellation_requested(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<T: CancellationSignal + ?Sized> CancellationSignal for &T {
    fn is_cancellation_requested(&self) -> bool {
        (**self).is_cancellation_requested()
    }
}

impl<T: CancellationSignal + ?Sized> CancellationSignal for Arc<T> {
    fn is_cancellation_requested(&self) -> bool {
        (**self).is_cancellation_requested()
    }
}

/// A signal that is never cancelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NeverCancelled;

impl CancellationSignal for NeverCancelled {
    fn is_cancellation_requested(&self) -> bool {
        false
    }
}

#[derive(Debug)]
struct CancellationState {
    cancelled: AtomicBool,
    parent: Option<CancellationToken>,
}

/// A read-only token that observes a [`CancellationSource`].
///
/// Tokens are cheap to clone; clones share the same state. A token created
/// with [`CancellationToken::child`] also reports cancellation when any of
/// its ancestors is cancelled.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    state: Arc<CancellationState>,
}

impl CancellationToken {
    fn with_parent(parent: Option<Self>) -> Self {
        Self {
            state: Arc::new(CancellationState {
                cancelled: AtomicBool::new(false),
                parent,
            }),
        }
    }

    /// Returns a token that is never cancelled.
    #[must_use]
    pub fn none() -> Self {
        Self::with_parent(None)
    }

    /// Returns `true` if this token or one of its ancestors is cancelled.
    pub fn is_cancelled(&self) -> bool {
        if self.state.cancelled.load(Ordering::Acquire) {
            return true;
        }
        self.state
            .parent
            .as_ref()
            .is_some_and(Self::is_cancelled)
    }

    /// Creates a source whose tokens are children of this token.
    #[must_use]
    pub fn child(&self) -> CancellationSource {
        CancellationSource {
            token: Self::with_parent(Some(self.clone())),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::none()
    }
}

impl CancellationSignal for CancellationToken {
    fn is_cancellation_requested(&self) -> bool {
        self.is_cancelled()
    }
}

/// Controls cancellation of the tokens it hands out.
#[derive(Debug)]
pub struct CancellationSource {
    token: CancellationToken,
}

impl CancellationSource {
    /// Creates a source that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: CancellationToken::with_parent(None),
        }
    }

    /// Returns a token observing this source.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Requests cancellation for every token of this source.
    pub fn cancel(&self) {
        self.token.state.cancelled.store(true, Ordering::Release);
    }

    /// Returns `true` if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationSignal for CancellationSource {
    fn is_cancellation_requested(&self) -> bool {
        self.is_cancelled()
    }
}

static_assertions::assert_impl_all!(CancellationToken: Send, Sync, Clone);
static_assertions::assert_impl_all!(CancellationSource: Send, Sync);
