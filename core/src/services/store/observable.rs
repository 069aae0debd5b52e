use tokio::sync::watch;

/// A value that notifies subscribers when it changes
#[derive(Debug)]
pub struct ObservableStore<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone + PartialEq> ObservableStore<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Replace the value; returns whether it changed
    pub fn set(&self, value: T) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }

    /// Modify the value in place; subscribers are notified only if it changed
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        self.sender.send_if_modified(|current| {
            let before = current.clone();
            f(current);
            *current != before
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

impl<T: Clone + PartialEq + Default> Default for ObservableStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_notifies_only_on_change() {
        let store = ObservableStore::new(1);
        let mut rx = store.subscribe();

        assert!(!store.set(1));
        assert!(!rx.has_changed().unwrap());

        assert!(store.set(2));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 2);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn test_update_in_place() {
        let store: ObservableStore<Vec<u8>> = ObservableStore::default();
        let mut rx = store.subscribe();

        assert!(store.update(|v| v.push(7)));
        assert!(!store.update(|v| v.retain(|x| *x == 7)));
        assert_eq!(*rx.borrow_and_update(), vec![7]);
    }
}
