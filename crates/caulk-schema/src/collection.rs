//! Name-keyed, ordered iteration over the top-level collections

use crate::schema::{Alias, Constant, EnumDef, Entity, Schema};
use std::fmt;
use std::str::FromStr;

/// A top-level collection of the schema document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Consts,
    Enums,
    Structs,
    CallbackStructs,
    Interfaces,
    Typedefs,
}

impl Collection {
    /// Every collection, in document emission order
    pub const ALL: [Collection; 6] = [
        Collection::Consts,
        Collection::Enums,
        Collection::Structs,
        Collection::CallbackStructs,
        Collection::Interfaces,
        Collection::Typedefs,
    ];

    /// Collections holding [`Entity`] nodes, in emission order
    pub const ENTITIES: [Collection; 3] = [
        Collection::Structs,
        Collection::CallbackStructs,
        Collection::Interfaces,
    ];

    /// Key of the collection in the schema document
    pub fn key(self) -> &'static str {
        match self {
            Collection::Consts => "consts",
            Collection::Enums => "enums",
            Collection::Structs => "structs",
            Collection::CallbackStructs => "callback_structs",
            Collection::Interfaces => "interfaces",
            Collection::Typedefs => "typedefs",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| format!("unknown schema collection: {s}"))
    }
}

/// A borrowed view of one schema node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Const(&'a Constant),
    Enum(&'a EnumDef),
    Entity(&'a Entity),
    Alias(&'a Alias),
}

impl<'a> Node<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Node::Const(c) => &c.name,
            Node::Enum(e) => &e.name,
            Node::Entity(e) => &e.name,
            Node::Alias(a) => &a.name,
        }
    }
}

/// Iterator returned by [`Schema::iterate`]
#[derive(Debug, Clone)]
pub enum Nodes<'a> {
    Consts(std::slice::Iter<'a, Constant>),
    Enums(std::slice::Iter<'a, EnumDef>),
    Entities(std::slice::Iter<'a, Entity>),
    Aliases(std::slice::Iter<'a, Alias>),
}

impl<'a> Iterator for Nodes<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Nodes::Consts(iter) => iter.next().map(Node::Const),
            Nodes::Enums(iter) => iter.next().map(Node::Enum),
            Nodes::Entities(iter) => iter.next().map(Node::Entity),
            Nodes::Aliases(iter) => iter.next().map(Node::Alias),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Nodes::Consts(iter) => iter.size_hint(),
            Nodes::Enums(iter) => iter.size_hint(),
            Nodes::Entities(iter) => iter.size_hint(),
            Nodes::Aliases(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Nodes<'_> {}

impl Schema {
    /// Iterate a collection in document order.
    ///
    /// The schema is never consumed; every call starts a fresh pass.
    pub fn iterate(&self, collection: Collection) -> Nodes<'_> {
        match collection {
            Collection::Consts => Nodes::Consts(self.consts.iter()),
            Collection::Enums => Nodes::Enums(self.enums.iter()),
            Collection::Structs
            | Collection::CallbackStructs
            | Collection::Interfaces => Nodes::Entities(self.entities(collection).iter()),
            Collection::Typedefs => Nodes::Aliases(self.typedefs.iter()),
        }
    }

    /// Entities of an entity collection; empty for the other collections
    pub fn entities(&self, collection: Collection) -> &[Entity] {
        match collection {
            Collection::Structs => &self.structs,
            Collection::CallbackStructs => &self.callback_structs,
            Collection::Interfaces => &self.interfaces,
            Collection::Consts | Collection::Enums | Collection::Typedefs => &[],
        }
    }
}

#[cfg(test)]
#[path = "collection/collection_tests.rs"]
mod collection_tests;
