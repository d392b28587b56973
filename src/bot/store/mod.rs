pub mod json;
pub mod memory;

/// Narrow contract for everything the bot persists: a snapshot read plus an
/// atomic read-modify-write. Message handling is strictly sequential, so at
/// most one update is ever in flight per store.
pub trait Store<T>: Send + Sync {
    fn get(&self) -> T;
    fn update(&self, apply: &mut dyn FnMut(T) -> T);
}
