//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the item data access contract.
//! - Isolate SQLite query details from the store and screen controllers.
//!
//! # Invariants
//! - Repository APIs distinguish storage failures (`RepoError`) from
//!   normal not-found outcomes (`Option` / `bool`).

pub mod item_repo;
