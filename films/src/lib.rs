//! Terminal viewer for the Star Wars films GraphQL API
//!
//! The page is driven by a three-state machine (loading, success, error).
//! Entering `loading` runs the films query through a cached GraphQL client;
//! the refetch control moves the machine back to `loading` from either
//! settled state.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod error;
pub mod graphql;
pub mod machine;
pub mod reducer;
pub mod state;
pub mod testing;
