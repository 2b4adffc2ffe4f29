// Tag co-occurrence counting.
// Builds a weighted undirected edge map from per-bookmark tag sets.

use std::collections::HashMap;

use serde::Serialize;

use crate::tags::TagSet;

/// String-keyed map that iterates in first-insertion order.
#[derive(Debug, Clone, Default)]
struct OrderedMap<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> OrderedMap<V> {
    fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.index.get(key).map(|&i| &mut self.entries[i].1)
    }

    fn get_or_insert(&mut self, key: &str) -> &mut V {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.entries.push((key.to_string(), V::default()));
                let i = self.entries.len() - 1;
                self.index.insert(key.to_string(), i);
                i
            }
        };
        &mut self.entries[i].1
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Edge direction marker written in the `Type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EdgeType {
    Undirected,
}

/// One row of the exported edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Target")]
    pub target: String,
    #[serde(rename = "Weight")]
    pub weight: u64,
    #[serde(rename = "Type")]
    pub edge_type: EdgeType,
}

impl EdgeRecord {
    pub fn new(source: &str, target: &str, weight: u64) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            weight,
            edge_type: EdgeType::Undirected,
        }
    }
}

/// Co-occurrence weights keyed by source tag, then target tag.
///
/// Each unordered pair is stored once, under the orientation in which it was
/// first seen; later sightings in either orientation add to that entry.
#[derive(Debug, Clone, Default)]
pub struct EdgeMap {
    sources: OrderedMap<OrderedMap<u64>>,
}

impl EdgeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every pair of positions `i < j` in every tag set.
    pub fn from_tag_sets<'a, I>(tag_sets: I) -> Self
    where
        I: IntoIterator<Item = &'a TagSet>,
    {
        let mut map = Self::new();
        for tag_set in tag_sets {
            map.add_tag_set(tag_set);
        }
        map
    }

    pub fn add_tag_set(&mut self, tags: &[String]) {
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                self.add_pair(a, b);
            }
        }
    }

    /// Record one co-occurrence of `a` and `b`. Equal tags add no edge.
    pub fn add_pair(&mut self, a: &str, b: &str) {
        // Both tags become sources in first-seen order, even if they end up
        // with no targets of their own. This holds for equal tags too.
        self.sources.get_or_insert(a);
        self.sources.get_or_insert(b);

        if a == b {
            return;
        }

        if let Some(weight) = self
            .sources
            .get_mut(b)
            .and_then(|targets| targets.get_mut(a))
            .filter(|w| **w > 0)
        {
            *weight += 1;
            return;
        }

        *self.sources.get_or_insert(a).get_or_insert(b) += 1;
    }

    /// Weight of the unordered pair `{a, b}`, zero if never seen.
    #[cfg(test)]
    fn weight(&self, a: &str, b: &str) -> u64 {
        let lookup = |x: &str, y: &str| {
            self.sources
                .get(x)
                .and_then(|targets| targets.get(y))
                .copied()
                .unwrap_or(0)
        };
        lookup(a, b) + lookup(b, a)
    }

    /// Flatten into rows, sources then targets in first-seen order.
    pub fn records(&self) -> Vec<EdgeRecord> {
        self.sources
            .iter()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |(target, &weight)| EdgeRecord::new(source, target, weight))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sources.iter().map(|(_, t)| t.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
