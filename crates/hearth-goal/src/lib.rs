//! # hearth-goal
//!
//! Goal lifecycle and completion-history store for Hearth.
//!
//! A [`Goal`] is one trackable unit of household work: it has an assignee,
//! a category, a due date (optionally a due time), and a two-state
//! lifecycle (Pending ⇄ Completed). Completing a goal records a
//! [`Completion`] — who closed it out and when — and reverting it removes
//! that record again.
//!
//! ## Key components
//!
//! - [`Goal`] / [`Completion`] — the two domain records
//! - [`GoalStore`] — in-memory owner of both collections, with
//!   create/update/delete/complete/revert operations and filtered queries
//! - [`AssigneeFilter`] — query-side filter ("everyone" or one member),
//!   kept distinct from the stored [`Assignee`] so the everyone sentinel
//!   can never be persisted on a goal
//! - [`seed::demo_store`] — the sample household dataset

pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use error::GoalError;
pub use store::GoalStore;
pub use types::{
    Assignee, AssigneeFilter, Category, Completion, Goal, GoalDraft, GoalPatch, GoalStatus,
};
