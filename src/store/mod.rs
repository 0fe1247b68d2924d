//! PostgreSQL implementation of the praise store.

pub mod postgres;

pub use postgres::PgPraiseStore;
