/// Set of picked ids. Membership is what matters; ids are kept in the order
/// they were picked so the request body reads the way the operator clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id> {
    ids: Vec<Id>,
}

impl<Id> Default for Selection<Id> {
    fn default() -> Self {
        Self { ids: Vec::new() }
    }
}

impl<Id: Copy + Eq> Selection<Id> {
    /// Adds `id` if absent, removes it otherwise. Returns whether `id` is
    /// selected afterwards.
    pub fn toggle(&mut self, id: Id) -> bool {
        match self.ids.iter().position(|picked| *picked == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn as_slice(&self) -> &[Id] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
