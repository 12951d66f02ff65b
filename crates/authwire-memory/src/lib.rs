// authwire-memory — in-memory user store.
//
// A HashMap-backed `UserLookup` for tests, prototyping and development.

pub mod store;

pub use store::MemoryUserStore;
