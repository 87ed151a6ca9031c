//! Per-operation state: the active locale and message verbosity.
//!
//! # Storage
//!
//! The context lives in a thread-local cell. Synchronous code activates one
//! with [`OperationContext::scope_sync`]. Async code wraps its future with
//! [`OperationContext::scope`], which installs the context around every
//! `poll` and stores it back afterwards, so tasks migrating between worker
//! threads keep their own locale and never see another task's.
//!
//! ```rust
//! use outcome_core::context::OperationContext;
//! use outcome_core::locale::{current_locale, Locale};
//!
//! let ctx = OperationContext::new().with_locale(Locale::parse("fr").unwrap());
//! ctx.scope_sync(|| assert_eq!(current_locale().to_string(), "fr"));
//! ```

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project::pin_project;

use crate::error::LocaleError;
use crate::locale::Locale;
use crate::verbosity::MessageVerbosity;

thread_local! {
    static CURRENT: RefCell<OperationContext> = RefCell::new(OperationContext::default());
}

// ---------------------------------------------------------------------------
// Context type
// ---------------------------------------------------------------------------

/// State scoped to a single logical operation.
///
/// Unset fields fall back to the process defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationContext {
    locale: Option<Locale>,
    verbosity: Option<MessageVerbosity>,
}

impl OperationContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Parses and sets the locale.
    pub fn with_locale_tag(self, tag: &str) -> Result<Self, LocaleError> {
        Ok(self.with_locale(Locale::parse(tag)?))
    }

    /// Sets the message verbosity options.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_verbosity(mut self, verbosity: MessageVerbosity) -> Self {
        self.verbosity = Some(verbosity);
        self
    }

    /// Locale override, if any.
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Verbosity override, if any.
    pub fn verbosity(&self) -> Option<MessageVerbosity> {
        self.verbosity
    }

    /// Snapshot of the context active on this thread.
    #[must_use]
    pub fn current() -> Self {
        CURRENT.with(|cell| cell.borrow().clone())
    }

    /// Runs a closure with this context active.
    ///
    /// Nesting is supported: inner scopes shadow outer ones and the outer
    /// context is restored on return or unwind.
    pub fn scope_sync<R>(mut self, f: impl FnOnce() -> R) -> R {
        let _entered = Entered::enter(&mut self);
        f()
    }

    /// Wraps a future so it runs with this context active.
    pub fn scope<F: Future>(self, future: F) -> Scoped<F> {
        Scoped {
            context: self,
            inner: future,
        }
    }
}

// ---------------------------------------------------------------------------
// Swapping
// ---------------------------------------------------------------------------

/// Holds a context swapped into the thread-local cell; swaps back on drop.
struct Entered<'a> {
    slot: &'a mut OperationContext,
}

impl<'a> Entered<'a> {
    fn enter(slot: &'a mut OperationContext) -> Self {
        CURRENT.with(|cell| std::mem::swap(&mut *cell.borrow_mut(), slot));
        Self { slot }
    }
}

impl Drop for Entered<'_> {
    fn drop(&mut self) {
        CURRENT.with(|cell| std::mem::swap(&mut *cell.borrow_mut(), self.slot));
    }
}

/// Future returned by [`OperationContext::scope`].
#[pin_project]
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct Scoped<F> {
    context: OperationContext,
    #[pin]
    inner: F,
}

impl<F: Future> Future for Scoped<F> {
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = Entered::enter(this.context);
        this.inner.poll(cx)
    }
}

// ---------------------------------------------------------------------------
// Crate-internal accessors
// ---------------------------------------------------------------------------

pub(crate) fn locale_override() -> Option<Locale> {
    CURRENT.with(|cell| cell.borrow().locale.clone())
}

/// Replaces the locale override and returns the previous one.
pub(crate) fn set_locale_override(locale: Option<Locale>) -> Option<Locale> {
    CURRENT.with(|cell| std::mem::replace(&mut cell.borrow_mut().locale, locale))
}

pub(crate) fn verbosity_override() -> Option<MessageVerbosity> {
    CURRENT.with(|cell| cell.borrow().verbosity)
}

/// Replaces the verbosity override and returns the previous one.
pub(crate) fn set_verbosity_override(
    verbosity: Option<MessageVerbosity>,
) -> Option<MessageVerbosity> {
    CURRENT.with(|cell| std::mem::replace(&mut cell.borrow_mut().verbosity, verbosity))
}
