use crate::application::ports::{QuoteRepository, StoreError};
use crate::infrastructure::config::SeedConfig;

/// Write the configured seed quotes straight into the store.
///
/// Seeding bypasses the live publisher: nobody is subscribed yet and the
/// quotes are history, not live events. Returns the number of quotes saved.
pub async fn seed_quotes(
    repository: &dyn QuoteRepository,
    seed: &SeedConfig,
) -> Result<usize, StoreError> {
    if seed.quotes.is_empty() {
        return Ok(0);
    }

    if seed.reset_on_start {
        let removed = repository.delete_all().await?;
        tracing::info!(removed, "cleared quote store");
    }

    for quote in &seed.quotes {
        repository.save(quote.to_new_quote()).await?;
    }

    tracing::info!(count = seed.quotes.len(), "seeded quotes");
    Ok(seed.quotes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryQuoteRepository;
    use fx_core::NewQuote;

    #[tokio::test]
    async fn test_seed_resets_store() {
        let repo = InMemoryQuoteRepository::new();
        let stale = SeedConfig::sample().quotes[0].to_new_quote();
        repo.save(NewQuote::new(9.0, 9.0, stale.date_time)).await.unwrap();

        let count = seed_quotes(&repo, &SeedConfig::sample()).await.unwrap();

        assert_eq!(count, 5);
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|q| q.buy < 9.0));
    }

    #[tokio::test]
    async fn test_seed_without_reset_appends() {
        let repo = InMemoryQuoteRepository::new();
        let mut seed = SeedConfig::sample();
        seed.reset_on_start = false;

        seed_quotes(&repo, &seed).await.unwrap();
        seed_quotes(&repo, &seed).await.unwrap();

        assert_eq!(repo.len(), 10);
    }

    #[tokio::test]
    async fn test_empty_seed_leaves_store_alone() {
        let repo = InMemoryQuoteRepository::new();
        let existing = SeedConfig::sample().quotes[0].to_new_quote();
        repo.save(existing).await.unwrap();

        let count = seed_quotes(&repo, &SeedConfig::default()).await.unwrap();

        assert_eq!(count, 0);
        assert_eq!(repo.len(), 1);
    }
}
