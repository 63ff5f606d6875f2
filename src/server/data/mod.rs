//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM entity queries for one table each and return domain models, keeping
//! entity types out of the service layer. Every repository is generic over `ConnectionTrait` so
//! the same queries run against the pool or inside a `DatabaseTransaction`.

pub mod article;
pub mod comment;
pub mod user;

#[cfg(test)]
mod test;
