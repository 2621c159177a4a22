use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use strum::Display;

use super::{errors::ArrangeError, schema_info::SchemaInfo};

/// How [`Orderer::sort`] produces the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SortStrategy {
  /// Stable ascending byte-wise sort by local name.
  Alphabetical,
  /// Greedy selection that minimizes forward references, mandatory ones
  /// first.
  #[default]
  DependenciesFirst,
  /// Sort by a named [`SchemaInfo`] attribute or zero-argument query.
  #[strum(to_string = "key:{0}")]
  Key(String),
}

/// One entry of a finished arrangement: the schema facts plus the subset of
/// its references not yet emitted at this position, i.e. those a generator
/// would have to forward declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrangedSchema {
  #[serde(rename = "ref")]
  pub schema_ref: String,
  pub name: String,
  pub schema: Value,
  pub direct_refs: BTreeMap<String, bool>,
  pub unseen_refs: BTreeSet<String>,
}

/// Orders the schemas of one container. Construction extracts the reference
/// facts; each [`sort`](Self::sort) call recomputes the order and the unseen
/// marks from scratch, so an instance may be re-sorted with a different
/// strategy.
#[derive(Debug)]
pub struct Orderer {
  schemas: IndexMap<String, SchemaInfo>,
  order: Vec<ArrangedSchema>,
  strategy: Option<SortStrategy>,
}

/// Accessors available to [`SortStrategy::Key`]. Sorting by anything else is
/// an [`ArrangeError::UnknownSortKey`].
fn key_accessor(key: &str) -> Option<for<'a> fn(&'a SchemaInfo) -> &'a str> {
  match key {
    "name" => Some(SchemaInfo::name),
    "ref" | "schema_ref" => Some(SchemaInfo::schema_ref),
    _ => None,
  }
}

impl Orderer {
  /// Builds one [`SchemaInfo`] per container entry, keyed by the container
  /// path joined with the local name. Insertion order of the container is
  /// preserved; no ordering happens here.
  #[must_use]
  pub fn new(path: &str, schema_specs: &Map<String, Value>) -> Self {
    let separator = if path.is_empty() || path.ends_with('/') { "" } else { "/" };
    let mut schemas = IndexMap::with_capacity(schema_specs.len());
    for (name, schema) in schema_specs {
      let schema_ref = format!("{path}{separator}{name}");
      schemas.insert(schema_ref.clone(), SchemaInfo::new(schema_ref, name, schema.clone()));
    }
    Self {
      schemas,
      order: Vec::new(),
      strategy: None,
    }
  }

  /// All schemas keyed by reference, in document insertion order.
  pub fn schemas(&self) -> &IndexMap<String, SchemaInfo> {
    &self.schemas
  }

  /// The most recent arrangement, empty before the first sort.
  pub fn order(&self) -> &[ArrangedSchema] {
    &self.order
  }

  /// The strategy of the most recent successful sort.
  pub fn strategy(&self) -> Option<&SortStrategy> {
    self.strategy.as_ref()
  }

  /// Consumes the orderer, yielding the most recent arrangement.
  #[must_use]
  pub fn into_order(self) -> Vec<ArrangedSchema> {
    self.order
  }

  /// Produces the arrangement for the given strategy and marks every entry's
  /// unseen references.
  pub fn sort(&mut self, strategy: SortStrategy) -> Result<&[ArrangedSchema], ArrangeError> {
    let sorted = match &strategy {
      SortStrategy::Alphabetical => Self::sort_by_accessor(&self.schemas, SchemaInfo::name),
      SortStrategy::DependenciesFirst => Self::greedy_required_first(&self.schemas),
      SortStrategy::Key(key) => {
        let accessor = key_accessor(key).ok_or_else(|| ArrangeError::UnknownSortKey {
          key: key.clone(),
          type_name: "SchemaInfo",
        })?;
        Self::sort_by_accessor(&self.schemas, accessor)
      }
    };
    self.order = Self::mark_as_seen(&sorted);
    self.strategy = Some(strategy);
    Ok(&self.order)
  }

  fn sort_by_accessor(
    schemas: &IndexMap<String, SchemaInfo>,
    accessor: for<'a> fn(&'a SchemaInfo) -> &'a str,
  ) -> Vec<&SchemaInfo> {
    let mut sorted: Vec<&SchemaInfo> = schemas.values().collect();
    sorted.sort_by_key(|info| accessor(info));
    sorted
  }

  /// Walks the order, maintaining the set of names already emitted; each
  /// entry's unseen references are the keys of its direct references not in
  /// that set. The entry's own name counts as emitted for its own marking,
  /// so a self-reference resolves in the step that declares it.
  fn mark_as_seen(order: &[&SchemaInfo]) -> Vec<ArrangedSchema> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    order
      .iter()
      .map(|info| {
        seen.insert(info.name());
        let unseen_refs = info
          .direct_refs()
          .keys()
          .filter(|target| !seen.contains(target.as_str()))
          .cloned()
          .collect();
        ArrangedSchema {
          schema_ref: info.schema_ref().to_string(),
          name: info.name().to_string(),
          schema: info.schema().clone(),
          direct_refs: info.direct_refs().clone(),
          unseen_refs,
        }
      })
      .collect()
  }

  /// Repeatedly appends the best remaining candidate until none remain.
  /// Exactly one entry is chosen per iteration, so arbitrary cycles
  /// terminate; the comparison in [`Candidate::better_by_counts`] breaks
  /// them deterministically.
  fn greedy_required_first(schemas: &IndexMap<String, SchemaInfo>) -> Vec<&SchemaInfo> {
    let mut chosen: Vec<&SchemaInfo> = Vec::with_capacity(schemas.len());
    let mut used: BTreeSet<&str> = BTreeSet::new();
    while chosen.len() < schemas.len() {
      let mut best: Option<Candidate> = None;
      for info in schemas.values() {
        if used.contains(info.schema_ref()) {
          continue;
        }
        let candidate = Candidate::evaluate(info, &chosen, &used);
        let better = match &best {
          None => true,
          Some(current) => match candidate.better_by_counts(current) {
            Some(decided) => decided,
            // Order by name if equally good otherwise.
            None => candidate.info.name() < current.info.name(),
          },
        };
        if better {
          best = Some(candidate);
        }
      }
      let Some(best) = best else { break };
      used.insert(best.info.schema_ref());
      chosen.push(best.info);
    }
    chosen
  }
}

/// A not-yet-chosen schema with its forward-reference counts against the
/// chosen prefix.
struct Candidate<'a> {
  /// Chosen entries referencing this schema optionally.
  optfwd: usize,
  /// Chosen entries referencing this schema mandatorily.
  manfwd: usize,
  /// This schema's own optional references not yet chosen.
  optrem: usize,
  /// This schema's own mandatory references not yet chosen.
  manrem: usize,
  info: &'a SchemaInfo,
}

impl<'a> Candidate<'a> {
  fn evaluate(info: &'a SchemaInfo, chosen: &[&SchemaInfo], used: &BTreeSet<&str>) -> Self {
    let optfwd = chosen
      .iter()
      .filter(|previous| previous.direct_refs().get(info.schema_ref()) == Some(&false))
      .count();
    let manfwd = chosen
      .iter()
      .filter(|previous| previous.direct_refs().get(info.schema_ref()) == Some(&true))
      .count();
    let optrem = info
      .direct_refs()
      .iter()
      .filter(|(target, required)| !**required && !used.contains(target.as_str()))
      .count();
    let manrem = info
      .direct_refs()
      .iter()
      .filter(|(target, required)| **required && !used.contains(target.as_str()))
      .count();
    Self {
      optfwd,
      manfwd,
      optrem,
      manrem,
      info,
    }
  }

  /// Whether this candidate beats the current best. Fewer mandatory forwards
  /// is good because it leaves more room for implementation, so the counts
  /// decide in the order manfwd, manrem, optfwd, optrem. A full tie falls to
  /// the mutual required relation: when the current best requires this
  /// candidate one-sidedly, picking this candidate resolves that requirement
  /// without creating one. An identical mutual relation is undecided and
  /// returns `None`.
  fn better_by_counts(&self, best: &Candidate) -> Option<bool> {
    if self.manfwd != best.manfwd {
      return Some(self.manfwd < best.manfwd);
    }
    if self.manrem != best.manrem {
      return Some(self.manrem < best.manrem);
    }
    if self.optfwd != best.optfwd {
      return Some(self.optfwd < best.optfwd);
    }
    if self.optrem != best.optrem {
      return Some(self.optrem < best.optrem);
    }
    let best_requires_self = best.info.requires(self.info.schema_ref());
    let self_requires_best = self.info.requires(best.info.schema_ref());
    if best_requires_self == self_requires_best {
      return None;
    }
    Some(!self_requires_best)
  }
}
