use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::dispose::Dispose;

type SubId = u64;
type Subscriber<T> = (SubId, Rc<dyn Fn(&T)>);

/// Observable cell. Cloning the handle shares the underlying value.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    next_sub: SubId,
    subs: SmallVec<[Subscriber<T>; 2]>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            next_sub: 0,
            subs: SmallVec::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    /// Stores `v` and notifies every subscriber with the new value, in
    /// subscription order. No equality check: writing the value the cell
    /// already holds still notifies.
    ///
    /// The interior borrow is released before listeners run, so a
    /// listener may re-enter `set` on this or any other cell. Listeners
    /// added during notification are not invoked for the in-flight
    /// change, and re-entrant listeners observe the value snapshot taken
    /// when their `set` started.
    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        let (current, snapshot) = {
            let mut inner = self.0.borrow_mut();
            inner.value = v;
            (inner.value.clone(), inner.subs.clone())
        };
        for (_, sub) in &snapshot {
            sub(&current);
        }
    }

    /// Mutates the value in place, then notifies as `set` does.
    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        let (current, snapshot) = {
            let mut inner = self.0.borrow_mut();
            f(&mut inner.value);
            (inner.value.clone(), inner.subs.clone())
        };
        for (_, sub) in &snapshot {
            sub(&current);
        }
    }

    /// Registers a change listener. The returned `Dispose` detaches it.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> Dispose {
        let id = {
            let mut inner = self.0.borrow_mut();
            let id = inner.next_sub;
            inner.next_sub += 1;
            inner.subs.push((id, Rc::new(f)));
            id
        };
        let weak = Rc::downgrade(&self.0);
        Dispose::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().subs.retain(|(sid, _)| *sid != id);
            }
        })
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
