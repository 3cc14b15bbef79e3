use crate::application::ports::{QuoteRepository, StoreError};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use dashmap::DashMap;
use fx_core::{DayWindow, NewQuote, Quote, QuoteId};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory quote store keyed by identifier
///
/// Identifiers start at 1 and are never reused, even after `delete_all`.
pub struct InMemoryQuoteRepository {
    quotes: Arc<DashMap<QuoteId, Quote>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        InMemoryQuoteRepository {
            quotes: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    fn sorted(&self, filter: impl Fn(&Quote) -> bool) -> Vec<Quote> {
        let mut quotes: Vec<Quote> = self
            .quotes
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        quotes.sort_by_key(|q| q.id);
        quotes
    }
}

impl Default for InMemoryQuoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryQuoteRepository {
    fn clone(&self) -> Self {
        InMemoryQuoteRepository {
            quotes: Arc::clone(&self.quotes),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn find_all(&self) -> Result<Vec<Quote>, StoreError> {
        Ok(self.sorted(|_| true))
    }

    async fn save(&self, quote: NewQuote) -> Result<Quote, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let quote = quote.with_id(id);
        self.quotes.insert(id, quote.clone());
        Ok(quote)
    }

    async fn find_by_date_time_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Quote>, StoreError> {
        let window = DayWindow { start, end };
        Ok(self.sorted(|q| window.contains(&q.date_time)))
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let removed = self.quotes.len() as u64;
        self.quotes.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryQuoteRepository::new();

        let first = repo.save(NewQuote::new(3.5, 3.7, at(10, 20, 0))).await.unwrap();
        let second = repo.save(NewQuote::new(3.55, 3.7, at(10, 30, 0))).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_id() {
        let repo = InMemoryQuoteRepository::new();
        for m in [55, 20, 40] {
            repo.save(NewQuote::new(3.5, 3.7, at(10, m, 0))).await.unwrap();
        }

        let ids: Vec<_> = repo.find_all().await.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_range_is_inclusive() {
        let repo = InMemoryQuoteRepository::new();
        repo.save(NewQuote::new(1.0, 1.0, at(0, 0, 0))).await.unwrap();
        repo.save(NewQuote::new(2.0, 2.0, at(12, 0, 0))).await.unwrap();
        repo.save(NewQuote::new(3.0, 3.0, at(23, 59, 59))).await.unwrap();

        let found = repo
            .find_by_date_time_between(at(0, 0, 0), at(23, 59, 59))
            .await
            .unwrap();
        assert_eq!(found.len(), 3);

        let found = repo
            .find_by_date_time_between(at(0, 0, 1), at(23, 59, 58))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].buy, 2.0);
    }

    #[tokio::test]
    async fn test_delete_all_keeps_id_sequence() {
        let repo = InMemoryQuoteRepository::new();
        repo.save(NewQuote::new(1.0, 1.0, at(1, 0, 0))).await.unwrap();
        repo.save(NewQuote::new(2.0, 2.0, at(2, 0, 0))).await.unwrap();

        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert!(repo.is_empty());

        let next = repo.save(NewQuote::new(3.0, 3.0, at(3, 0, 0))).await.unwrap();
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = InMemoryQuoteRepository::new();
        let clone = repo.clone();

        clone.save(NewQuote::new(1.0, 1.0, at(1, 0, 0))).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
