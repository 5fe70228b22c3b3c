pub mod repositories;

pub use repositories::MockStore;
