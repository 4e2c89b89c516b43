//! # Rollcall API
//!
//! A classroom-management REST API built with Axum. Teachers create classes
//! and enroll students; students view the classes they belong to and their
//! own attendance.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Bearer-token and role extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Signup, login, current user
//! │   ├── classes/     # Classes and rosters
//! │   └── attendance/  # Attendance lookup and recording
//! ├── docs.rs          # OpenAPI document
//! ├── logging.rs       # Subscriber setup and request logging
//! ├── realtime.rs      # Inert WebSocket acceptor
//! ├── router.rs        # Route table
//! ├── state.rs         # Shared application state
//! └── validator.rs     # Validating extractors
//! ```
//!
//! Each feature module has the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business rules against a [`ClassroomStore`](rollcall_db::ClassroomStore)
//! - `model.rs`: request DTOs
//! - `router.rs`: the module's routes
//!
//! Shared pieces live in workspace crates:
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `rollcall-core` | `AppError`, `ApiResponse`, bcrypt helpers |
//! | `rollcall-config` | JWT, CORS and password settings from the environment |
//! | `rollcall-models` | `Role`, `User`, `Class`, `AttendanceRecord` |
//! | `rollcall-auth` | JWT claims and the token codec |
//! | `rollcall-db` | The store trait, PostgreSQL and in-memory stores, migrations |
//!
//! ## Roles
//!
//! | Role | May |
//! |------|-----|
//! | Teacher | create classes, enroll students, view own classes, list students, record attendance |
//! | Student | view classes they are enrolled in, view own attendance |
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=change-me DATABASE_URL=postgres://localhost/rollcall cargo run -- --migrate
//! # or without a database
//! JWT_SECRET=change-me cargo run -- --in-memory
//! ```
//!
//! Documentation is served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod realtime;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use rollcall_auth;
pub use rollcall_config;
pub use rollcall_core;
pub use rollcall_db;
pub use rollcall_models;
