//! Entity ↔ model mappers
//!
//! Status/role columns are stored as strings; unknown values fall back to
//! the enum default rather than failing the row.

mod application;
mod assignment;
mod audit_log;
mod goal;
mod notification;
mod stats;
mod submission;
mod upload;
mod user;
