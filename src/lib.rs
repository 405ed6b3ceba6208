//! Exam session scheduling and enrollment allocation.
//!
//! Assigns a student's exam registration to a concrete
//! (date, time slot, room) triple. The engine guarantees that no student
//! is double-booked into overlapping sessions, that no session exceeds
//! its seat capacity, and that a new session is created only when no
//! existing session can absorb the enrollment.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Exam`, `Room`, `Session`, `Enrollment`,
//!   `TimeSlot`
//! - **`config`**: Immutable engine configuration — `SchedulerConfig`,
//!   `SlotWindow`
//! - **`duration`**: Legacy free-text duration parsing (migration shim)
//! - **`repository`**: The `ScheduleStore` boundary and its in-memory
//!   reference implementation
//! - **`scheduler`**: The engine — reuse finder, bounded-horizon
//!   synthesizer, enrollment coordinator
//! - **`validation`**: Structural checks on room topology and
//!   configuration
//!
//! # Architecture
//!
//! The engine is a pure library invoked in-process. Persistence is owned
//! by the surrounding application behind `repository::ScheduleStore`;
//! each `assign` call is one synchronous, atomic unit of work that
//! re-reads all state from the store. Search behavior is tuned solely
//! through the injected `SchedulerConfig`; no process globals.

pub mod config;
pub mod duration;
pub mod models;
pub mod repository;
pub mod scheduler;
pub mod validation;
