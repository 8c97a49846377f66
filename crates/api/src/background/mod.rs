//! Background tasks.
//!
//! Tasks are spawned on the [`AppState::mint_tasks`](crate::state::AppState)
//! tracker so shutdown can wait for them to finish.

pub mod ownership_mint;
