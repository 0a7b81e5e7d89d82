//! Library of goals

#[macro_use]
pub mod combinators;
#[macro_use]
pub mod list;
#[macro_use]
pub mod primitive;
