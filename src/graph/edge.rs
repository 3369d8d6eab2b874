use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

/// A weighted, directed connection between two vertices
///
/// Equality and hashing are structural: two edges are equal only when `from`,
/// `to` and `weight` all match, so parallel edges with different weights are
/// distinct. Use [`Edge::by_weight`] to sort edges by weight.
#[derive(Debug, Clone)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

impl<V> Edge<V> {
    /// Creates a new edge `from -> to` with the given weight
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Edge { from, to, weight }
    }

    /// Returns the same connection pointing the other way
    pub fn reversed(&self) -> Self
    where
        V: Clone,
    {
        Edge {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }

    /// Returns true if `other` is this edge reversed
    pub fn is_reverse_of(&self, other: &Edge<V>) -> bool
    where
        V: PartialEq,
    {
        self.from == other.to
            && self.to == other.from
            && OrderedFloat(self.weight) == OrderedFloat(other.weight)
    }

    /// Orders two edges by weight only
    pub fn by_weight(a: &Edge<V>, b: &Edge<V>) -> Ordering {
        OrderedFloat(a.weight).cmp(&OrderedFloat(b.weight))
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && OrderedFloat(self.weight) == OrderedFloat(other.weight)
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        OrderedFloat(self.weight).hash(state);
    }
}

impl<V: Debug> Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -({})-> {:?}", self.from, self.weight, self.to)
    }
}
