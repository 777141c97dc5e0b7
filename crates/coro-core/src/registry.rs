use tracing::{info, trace};

/// Lista ordenada de todas las instancias creadas de un tipo.
///
/// Sólo crece (`register`) o se vacía por completo (`reset`). Vaciarlo no
/// toca las entidades: siguen vivas en el [`Catalog`](crate::Catalog) y
/// accesibles por id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<Id> {
  label: &'static str,
  entries: Vec<Id>,
}

impl<Id: Copy + PartialEq + std::fmt::Display> Registry<Id> {
  pub fn new(label: &'static str) -> Self {
    Self::with_capacity(label, 0)
  }

  pub fn with_capacity(label: &'static str, capacity: usize) -> Self {
    Self { label, entries: Vec::with_capacity(capacity) }
  }

  pub fn register(&mut self, id: Id) {
    trace!(registry = self.label, %id, "registered");
    self.entries.push(id);
  }

  /// Vacía el registro. Sobre un registro vacío no hace nada.
  pub fn reset(&mut self) {
    if !self.entries.is_empty() {
      info!(registry = self.label, dropped = self.entries.len(), "registry reset");
    }
    self.entries.clear();
  }

  pub fn all(&self) -> &[Id] {
    &self.entries
  }

  pub fn iter(&self) -> impl Iterator<Item = Id> + '_ {
    self.entries.iter().copied()
  }

  pub fn count(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn contains(&self, id: Id) -> bool {
    self.entries.contains(&id)
  }

  pub fn label(&self) -> &'static str {
    self.label
  }
}
