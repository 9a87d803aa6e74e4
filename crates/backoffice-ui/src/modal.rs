//! Modal visibility state.
//!
//! A component mounts one [`ModalVisibility`] and calls
//! [`ModalVisibility::use_modal`] on every render. It gets back the current
//! flag and two transition handles. The handles keep their identity across
//! renders for as long as the injected [`ModalCallbacks`] are the same `Rc`s,
//! so they can be handed to children without invalidating them.
//!
//! Lifecycle: `mount` → `use_modal`* → `unmount`

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

/// Side effect run before a transition changes the flag.
pub type Callback = Rc<dyn Fn()>;

/// Optional show/hide side effects injected at construction.
#[derive(Clone, Default)]
pub struct ModalCallbacks {
    pub show: Option<Callback>,
    pub hide: Option<Callback>,
}

impl ModalCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_show(mut self, f: impl Fn() + 'static) -> Self {
        self.show = Some(Rc::new(f));
        self
    }

    pub fn on_hide(mut self, f: impl Fn() + 'static) -> Self {
        self.hide = Some(Rc::new(f));
        self
    }

    /// Reference equality on both callbacks.
    fn same_as(&self, other: &Self) -> bool {
        same_callback(self.show.as_ref(), other.show.as_ref())
            && same_callback(self.hide.as_ref(), other.hide.as_ref())
    }
}

impl fmt::Debug for ModalCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalCallbacks")
            .field("show", &self.show.is_some())
            .field("hide", &self.hide.is_some())
            .finish()
    }
}

fn same_callback(a: Option<&Callback>, b: Option<&Callback>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

/// A show or hide transition.
///
/// Cloning shares the underlying closure, so [`ModalAction::ptr_eq`] holds
/// between clones.
#[derive(Clone)]
pub struct ModalAction(Rc<dyn Fn()>);

impl ModalAction {
    /// Run the external callback (if any), then update the flag.
    ///
    /// A panicking callback unwinds out of here before the flag changes.
    pub fn call(&self) {
        (self.0)();
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ModalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ModalAction(..)")
    }
}

struct Memo {
    callbacks: ModalCallbacks,
    show: ModalAction,
    hide: ModalAction,
}

/// Mounted modal state: one boolean flag plus memoized transitions.
pub struct ModalVisibility {
    active: Rc<Cell<bool>>,
    memo: Option<Memo>,
}

impl ModalVisibility {
    /// Create the state for a freshly mounted component. Starts hidden.
    pub fn mount() -> Self {
        Self {
            active: Rc::new(Cell::new(false)),
            memo: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Returns `(active, show, hide)`.
    ///
    /// The handles are rebuilt only when `callbacks` differ by reference from
    /// the previous call.
    pub fn use_modal(&mut self, callbacks: &ModalCallbacks) -> (bool, ModalAction, ModalAction) {
        let memo = match self.memo.take() {
            Some(memo) if memo.callbacks.same_as(callbacks) => memo,
            _ => self.build(callbacks),
        };
        let out = (self.active.get(), memo.show.clone(), memo.hide.clone());
        self.memo = Some(memo);
        out
    }

    /// Reset to hidden and forget the memoized handles.
    pub fn unmount(&mut self) {
        self.active.set(false);
        self.memo = None;
    }

    fn build(&self, callbacks: &ModalCallbacks) -> Memo {
        trace!(?callbacks, "building modal transitions");
        Memo {
            callbacks: callbacks.clone(),
            show: transition(&self.active, callbacks.show.clone(), true),
            hide: transition(&self.active, callbacks.hide.clone(), false),
        }
    }
}

impl Default for ModalVisibility {
    fn default() -> Self {
        Self::mount()
    }
}

impl fmt::Debug for ModalVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalVisibility")
            .field("active", &self.active.get())
            .field("memoized", &self.memo.is_some())
            .finish()
    }
}

fn transition(active: &Rc<Cell<bool>>, callback: Option<Callback>, target: bool) -> ModalAction {
    let active = Rc::clone(active);
    ModalAction(Rc::new(move || {
        if let Some(cb) = &callback {
            cb();
        }
        active.set(target);
    }))
}
