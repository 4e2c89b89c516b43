//! # Rollcall Models
//!
//! Domain types shared by the store, the token codec, and the HTTP layer.
//!
//! - [`roles`]: the closed [`Role`] enum
//! - [`users`]: [`User`] and the store-facing user inputs
//! - [`classes`]: [`Class`], [`ClassDetail`], [`StudentSummary`]
//! - [`attendance`]: [`AttendanceRecord`] and [`AttendanceStatus`]

pub mod attendance;
pub mod classes;
pub mod roles;
pub mod users;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use classes::{Class, ClassDetail, StudentSummary};
pub use roles::Role;
pub use users::{NewUser, User, UserCredentials};
