//! In-memory implementation of CaseRepository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::case::{Case, CaseError};
use crate::domain::foundation::{CaseId, UserId};
use crate::ports::CaseRepository;

/// In-memory case store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryCaseRepository {
    cases: RwLock<HashMap<CaseId, Case>>,
}

impl InMemoryCaseRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored cases.
    pub fn len(&self) -> usize {
        self.cases.read().unwrap().len()
    }

    /// Returns true if no cases are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CaseRepository for InMemoryCaseRepository {
    async fn save(&self, case: &Case) -> Result<(), CaseError> {
        self.cases
            .write()
            .unwrap()
            .insert(*case.id(), case.clone());
        Ok(())
    }

    async fn update(&self, case: &Case) -> Result<(), CaseError> {
        let mut cases = self.cases.write().unwrap();
        if !cases.contains_key(case.id()) {
            return Err(CaseError::NotFound(*case.id()));
        }
        cases.insert(*case.id(), case.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &CaseId) -> Result<Option<Case>, CaseError> {
        Ok(self.cases.read().unwrap().get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Case>, CaseError> {
        let mut owned: Vec<Case> = self
            .cases
            .read()
            .unwrap()
            .values()
            .filter(|c| c.is_owner(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(owned)
    }

    async fn touch(&self, id: &CaseId) -> Result<(), CaseError> {
        let mut cases = self.cases.write().unwrap();
        match cases.get_mut(id) {
            Some(case) => {
                case.touch();
                Ok(())
            }
            None => Err(CaseError::NotFound(*id)),
        }
    }
}
