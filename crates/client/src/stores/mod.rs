//! Session-scoped state stores.
//!
//! Each store is an explicitly constructed container, generic over
//! [`MealApi`](crate::api::MealApi), that mediates every mutation through the
//! remote API. Mutations are confirm-then-apply: local state changes only
//! after server acknowledgment, so at rest a store always matches the
//! server's authoritative state.
//!
//! Store operations take `&mut self`, which serializes mutations per store
//! by construction: two calls on the same store cannot overlap from safe
//! code.

pub mod login;
pub mod planner;
pub mod profile;

pub use login::LoginForm;
pub use planner::PlannerStore;
pub use profile::ProfileEditor;

#[cfg(test)]
pub(crate) mod testing;
