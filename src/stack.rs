//! # Navigation Stack Module
//!
//! The navigation stack is the collaborator that owns screen mounting. The
//! presenter decides *what* to mount and *whether* it may be mounted; the
//! stack decides *how*. This module defines the [`NavStack`] contract the
//! presenter drives, plus [`MemoryStack`], a plain in-memory implementation
//! used by tests, benchmarks, and headless hosts.
//!
//! ## Ownership
//!
//! Entries own their screens. Mounting hands a [`StackEntry`] to the stack;
//! the pop family hands entries back to the caller, so a popped screen can be
//! inspected or reused instead of silently dropped.

use crate::ids::ScreenId;
use crate::screen::{BoxedScreen, PresentationStyle};
use std::fmt;
use tracing::debug;

/// Callback invoked by the stack once a presentation completes.
pub type Completion = Box<dyn FnOnce() + Send>;

/// One mounted entry: the screen plus the style it was mounted with.
pub struct StackEntry {
    pub screen: BoxedScreen,
    pub style: PresentationStyle,
}

impl StackEntry {
    /// Entry for push navigation (default style).
    #[must_use]
    pub fn new(screen: BoxedScreen) -> Self {
        Self {
            screen,
            style: PresentationStyle::default(),
        }
    }

    /// Entry for modal presentation with an explicit style.
    #[must_use]
    pub fn styled(screen: BoxedScreen, style: PresentationStyle) -> Self {
        Self { screen, style }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> ScreenId {
        self.screen.id()
    }
}

impl fmt::Debug for StackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackEntry")
            .field("id", &self.id())
            .field("style", &self.style)
            .finish()
    }
}

/// Contract for the navigation-stack collaborator.
///
/// The stack maintains an ordered collection of mounted entries with a
/// topmost visible entry. Implementations decide how `animated` is realized
/// and whether the root entry is protected from popping; [`MemoryStack`]
/// retains a sole root the way a platform navigation controller does.
pub trait NavStack: Send {
    /// Mount an entry on top of the stack (push navigation).
    fn push_screen(&mut self, entry: StackEntry, animated: bool);

    /// Mount an entry modally and invoke `completion` once the presentation
    /// has finished.
    fn present_screen(&mut self, entry: StackEntry, animated: bool, completion: Option<Completion>);

    /// Remove and return the topmost entry, if one can be removed.
    fn pop_topmost(&mut self, animated: bool) -> Option<StackEntry>;

    /// Remove everything above the root. Popped entries return topmost-first.
    fn pop_to_root(&mut self, animated: bool) -> Vec<StackEntry>;

    /// Remove entries until `target` is topmost. Returns the popped entries
    /// topmost-first, or `None` (stack unchanged) when `target` is not
    /// mounted.
    fn pop_to(&mut self, target: ScreenId, animated: bool) -> Option<Vec<StackEntry>>;

    /// The topmost visible entry, used as the default presentation anchor.
    fn top(&self) -> Option<&StackEntry>;

    /// Number of mounted entries.
    fn depth(&self) -> usize;

    /// Whether an entry with this id is currently mounted.
    fn contains(&self, id: ScreenId) -> bool;
}

/// Vec-backed reference implementation of [`NavStack`].
///
/// Fully synchronous: presentations mount immediately and completions run
/// inline; `animated` is recorded in diagnostics only. The bottom entry acts
/// as the root and is never removed by the pop family.
#[derive(Debug, Default)]
pub struct MemoryStack {
    entries: Vec<StackEntry>,
}

impl MemoryStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Convenience for handing the stack to a navigator.
    #[must_use]
    pub fn boxed() -> Box<dyn NavStack> {
        Box::new(Self::new())
    }

    /// Mounted entries, bottom-first.
    #[must_use]
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// Ids of mounted entries, bottom-first.
    #[must_use]
    pub fn ids(&self) -> Vec<ScreenId> {
        self.entries.iter().map(StackEntry::id).collect()
    }
}

impl NavStack for MemoryStack {
    fn push_screen(&mut self, entry: StackEntry, animated: bool) {
        debug!(
            screen_id = %entry.id(),
            animated,
            depth = self.entries.len() + 1,
            "Stack push"
        );
        self.entries.push(entry);
    }

    fn present_screen(
        &mut self,
        entry: StackEntry,
        animated: bool,
        completion: Option<Completion>,
    ) {
        debug!(
            screen_id = %entry.id(),
            style = ?entry.style,
            animated,
            depth = self.entries.len() + 1,
            "Stack present"
        );
        self.entries.push(entry);
        if let Some(completion) = completion {
            completion();
        }
    }

    fn pop_topmost(&mut self, animated: bool) -> Option<StackEntry> {
        if self.entries.len() <= 1 {
            return None;
        }
        let entry = self.entries.pop();
        if let Some(e) = &entry {
            debug!(screen_id = %e.id(), animated, depth = self.entries.len(), "Stack pop");
        }
        entry
    }

    fn pop_to_root(&mut self, animated: bool) -> Vec<StackEntry> {
        if self.entries.len() <= 1 {
            return Vec::new();
        }
        let mut popped = self.entries.split_off(1);
        popped.reverse();
        debug!(count = popped.len(), animated, "Stack pop to root");
        popped
    }

    fn pop_to(&mut self, target: ScreenId, animated: bool) -> Option<Vec<StackEntry>> {
        let position = self.entries.iter().rposition(|e| e.id() == target)?;
        let mut popped = self.entries.split_off(position + 1);
        popped.reverse();
        debug!(
            target_id = %target,
            count = popped.len(),
            animated,
            "Stack pop to screen"
        );
        Some(popped)
    }

    fn top(&self) -> Option<&StackEntry> {
        self.entries.last()
    }

    fn depth(&self) -> usize {
        self.entries.len()
    }

    fn contains(&self, id: ScreenId) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }
}
