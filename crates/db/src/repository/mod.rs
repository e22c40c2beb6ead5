//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! No business logic, no response shapes — pure SQL.

pub mod bookings;
pub mod rooms;
