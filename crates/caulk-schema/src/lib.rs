//! caulk-schema - Schema tree for the binding generator
//!
//! This crate provides:
//! - [`Schema`] parsed once from a permissive JSON document
//! - typed nodes ([`Entity`], [`Method`], [`EnumDef`], ...) in document order
//! - [`Schema::iterate`] for name-keyed, restartable collection iteration

mod collection;
mod relax;
mod schema;

pub use collection::{Collection, Node, Nodes};
pub use schema::{
    Accessor, Alias, Constant, Entity, EnumDef, EnumValue, Field, Method, Param, Schema,
};
