use std::sync::Mutex;

use crate::bot::store::Store;

/// In-memory store for tests and embedding; same contract, no disk.
pub struct MemStore<T> {
    cell: Mutex<T>,
}

impl<T> MemStore<T> {
    pub fn new(initial: T) -> Self {
        Self {
            cell: Mutex::new(initial),
        }
    }
}

impl<T> Store<T> for MemStore<T>
where
    T: Clone + Send,
{
    fn get(&self) -> T {
        self.cell.lock().expect("store mutex poisoned").clone()
    }

    fn update(&self, apply: &mut dyn FnMut(T) -> T) {
        let mut cell = self.cell.lock().expect("store mutex poisoned");
        *cell = apply(cell.clone());
    }
}
