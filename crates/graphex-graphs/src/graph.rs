use fxhash::FxHashMap;
use graphex_paths::{Network, Node};

use crate::error::GraphError;

/// A graph holding one value per edge, directed or undirected.
///
/// Nodes are interned into dense indices in insertion order, and successor
/// lists keep the order edges were added in, so iteration (and therefore
/// search tie-breaking) is deterministic. At most one edge connects an
/// ordered pair; in an undirected graph `a -> b` and `b -> a` are the same
/// edge.
#[derive(Clone, Debug)]
pub struct ValueGraph<N, V> {
    directed: bool,
    self_loops: bool,
    nodes: Vec<N>,
    index: FxHashMap<N, usize>,
    adjacency: Vec<Vec<usize>>,
    values: FxHashMap<(usize, usize), V>,
}

impl<N: Node, V> ValueGraph<N, V> {
    /// An empty directed graph without self loops.
    pub fn directed() -> Self {
        Self::with_direction(true)
    }

    /// An empty undirected graph without self loops.
    pub fn undirected() -> Self {
        Self::with_direction(false)
    }

    fn with_direction(directed: bool) -> Self {
        Self {
            directed,
            self_loops: false,
            nodes: Vec::new(),
            index: FxHashMap::default(),
            adjacency: Vec::new(),
            values: FxHashMap::default(),
        }
    }

    /// Allow or forbid edges from a node to itself.
    pub fn allows_self_loops(mut self, allow: bool) -> Self {
        self.self_loops = allow;
        self
    }

    pub fn self_loops_allowed(&self) -> bool {
        self.self_loops
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add `node` if absent. Returns whether the graph changed.
    pub fn add_node(&mut self, node: N) -> bool {
        self.intern(node).1
    }

    fn intern(&mut self, node: N) -> (usize, bool) {
        if let Some(&i) = self.index.get(&node) {
            return (i, false);
        }
        let i = self.nodes.len();
        self.index.insert(node.clone(), i);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        (i, true)
    }

    #[inline]
    fn key(&self, a: usize, b: usize) -> (usize, usize) {
        if self.directed || a <= b { (a, b) } else { (b, a) }
    }

    fn indices(&self, from: &N, to: &N) -> Option<(usize, usize)> {
        Some((*self.index.get(from)?, *self.index.get(to)?))
    }

    /// Connect `from` to `to` with `value`, adding missing nodes.
    ///
    /// Replaces the value of an existing edge and returns the previous one.
    pub fn put_edge_value(&mut self, from: N, to: N, value: V) -> Result<Option<V>, GraphError> {
        if from == to && !self.self_loops {
            return Err(GraphError::SelfLoop(format!("{from:?}")));
        }
        Ok(self.insert_edge(from, to, value))
    }

    /// [`put_edge_value`](Self::put_edge_value) without the self-loop check,
    /// for callers whose endpoints are distinct by construction.
    pub(crate) fn insert_edge(&mut self, from: N, to: N, value: V) -> Option<V> {
        let (a, _) = self.intern(from);
        let (b, _) = self.intern(to);
        let key = self.key(a, b);
        let previous = self.values.insert(key, value);
        if previous.is_none() {
            self.adjacency[a].push(b);
            if !self.directed && a != b {
                self.adjacency[b].push(a);
            }
        }
        previous
    }

    /// Connect `from` to `to`, failing if they are already connected.
    pub fn add_edge(&mut self, from: N, to: N, value: V) -> Result<(), GraphError> {
        if self.has_edge_connecting(&from, &to) {
            return Err(GraphError::parallel_edge(&from, &to));
        }
        self.put_edge_value(from, to, value).map(|_| ())
    }

    /// Remove the edge from `from` to `to` and return its value.
    pub fn remove_edge(&mut self, from: &N, to: &N) -> Option<V> {
        let (a, b) = self.indices(from, to)?;
        let value = self.values.remove(&self.key(a, b))?;
        self.adjacency[a].retain(|&n| n != b);
        if !self.directed {
            self.adjacency[b].retain(|&n| n != a);
        }
        Some(value)
    }

    pub fn edge_value(&self, from: &N, to: &N) -> Option<&V> {
        let (a, b) = self.indices(from, to)?;
        self.values.get(&self.key(a, b))
    }

    pub fn has_edge_connecting(&self, from: &N, to: &N) -> bool {
        self.edge_value(from, to).is_some()
    }

    /// Nodes reachable from `node` over one edge, in insertion order. Empty
    /// for unknown nodes.
    pub fn successors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.index
            .get(node)
            .into_iter()
            .flat_map(move |&i| self.adjacency[i].iter().map(move |&j| &self.nodes[j]))
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// All edges as `(from, to, value)`. Undirected edges appear once, with
    /// the earlier inserted node first.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &V)> {
        self.adjacency.iter().enumerate().flat_map(move |(a, succ)| {
            succ.iter()
                .filter(move |&&b| self.directed || a <= b)
                .filter_map(move |&b| {
                    let value = self.values.get(&self.key(a, b))?;
                    Some((&self.nodes[a], &self.nodes[b], value))
                })
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.values.len()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Same nodes and edges, with every value mapped through `f`.
    pub fn map_values<W>(&self, mut f: impl FnMut(&V) -> W) -> ValueGraph<N, W> {
        ValueGraph {
            directed: self.directed,
            self_loops: self.self_loops,
            nodes: self.nodes.clone(),
            index: self.index.clone(),
            adjacency: self.adjacency.clone(),
            values: self.values.iter().map(|(&k, v)| (k, f(v))).collect(),
        }
    }
}

impl<N: Node, V> Network<N> for ValueGraph<N, V> {
    type Edge = V;

    fn successors(&self, node: &N, buf: &mut Vec<N>) {
        buf.extend(ValueGraph::successors(self, node).cloned());
    }

    fn edge_connecting(&self, from: &N, to: &N) -> Option<&V> {
        self.edge_value(from, to)
    }
}
