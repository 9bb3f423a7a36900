use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Token identifying one registration in a [`ListenerRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Callbacks keyed by registration token.
///
/// Every insert is a distinct entry even when the same callback is added
/// twice. Iteration follows registration order.
pub struct ListenerRegistry<F: ?Sized> {
    next_id: u64,
    entries: BTreeMap<ListenerId, Rc<F>>,
}

impl<F: ?Sized> Default for ListenerRegistry<F> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: BTreeMap::new(),
        }
    }
}

impl<F: ?Sized> fmt::Debug for ListenerRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<F: ?Sized> ListenerRegistry<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, listener: Rc<F>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, listener);
        id
    }

    /// Removes the registration; absent ids are ignored.
    pub fn remove(&mut self, id: ListenerId) -> Option<Rc<F>> {
        self.entries.remove(&id)
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies the current registrations so callbacks can run without a borrow held.
    pub fn snapshot(&self) -> Vec<(ListenerId, Rc<F>)> {
        self.entries
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect()
    }
}
