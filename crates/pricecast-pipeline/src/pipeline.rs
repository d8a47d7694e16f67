//! Price-factor pipeline orchestration.

use std::time::Duration;

use pricecast_core::{AggregateResult, AppConfig, Category, Event, FactorResult, SearchResult};
use pricecast_extractor::{EventExtractor, Extraction, GeminiClient};
use pricecast_postcodes::{LocationResolver, PostcodesClient};
use pricecast_search::{build_query, SearchClient};

use crate::error::PipelineError;
use crate::scorer::{impact_score, round2};
use crate::validate::{is_valid_location, is_valid_timeline};

/// Factors processed per category in test mode.
const TEST_MODE_FACTORS_PER_CATEGORY: usize = 2;

/// Counts outbound search and model calls made during one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounter(u32);

impl CallCounter {
    pub fn record(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    #[must_use]
    pub fn count(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Only process the first two factors of each category.
    pub test_mode: bool,
    /// Pause after each factor whose extractor returned events.
    pub factor_delay: Duration,
}

impl PipelineOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            test_mode: config.test_mode,
            factor_delay: Duration::from_millis(config.factor_delay_ms),
        }
    }
}

/// The three service clients plus run options.
pub struct Pipeline {
    search: SearchClient,
    extractor: EventExtractor,
    resolver: LocationResolver,
    options: PipelineOptions,
}

impl Pipeline {
    #[must_use]
    pub fn new(
        search: SearchClient,
        extractor: EventExtractor,
        resolver: LocationResolver,
        options: PipelineOptions,
    ) -> Self {
        Self {
            search,
            extractor,
            resolver,
            options,
        }
    }

    /// Build all clients from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if any HTTP client cannot be constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PipelineError> {
        let search = SearchClient::with_base_url(
            &config.serper_api_key,
            &config.user_agent,
            config.test_mode,
            &config.search_base_url,
        )?;
        let gemini = GeminiClient::with_base_url(
            &config.gemini_api_key,
            &config.gemini_model,
            &config.user_agent,
            &config.gemini_base_url,
        )?;
        let postcodes =
            PostcodesClient::with_base_url(&config.user_agent, &config.postcodes_base_url)?;

        Ok(Self::new(
            search,
            EventExtractor::new(gemini),
            LocationResolver::new(postcodes),
            PipelineOptions::from_app_config(config),
        ))
    }

    /// Run every factor for `postcode` and return the aggregate.
    ///
    /// Search and model failures are logged and treated as empty results.
    /// Factors with no surviving events are left out of the aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Json`] if kept events cannot be serialized for
    /// scoring. No partial aggregate is returned on error.
    pub async fn run(&self, postcode: &str) -> Result<AggregateResult, PipelineError> {
        let mut aggregate = AggregateResult::new(postcode);
        let mut calls = CallCounter::default();

        for category in Category::ALL {
            tracing::info!(postcode, category = category.name(), "processing category");

            for &factor in self.factors_for(category) {
                if let Some(result) = self
                    .process_factor(postcode, category, factor, &mut calls)
                    .await?
                {
                    aggregate
                        .factors
                        .get_mut(category)
                        .insert(factor.to_string(), result);
                }
            }
        }

        aggregate.search_count = calls.count();
        tracing::info!(
            postcode,
            search_count = aggregate.search_count,
            factors = aggregate.factors.factor_count(),
            "pipeline run complete"
        );
        Ok(aggregate)
    }

    fn factors_for(&self, category: Category) -> &'static [&'static str] {
        let factors = category.factors();
        if self.options.test_mode {
            &factors[..factors.len().min(TEST_MODE_FACTORS_PER_CATEGORY)]
        } else {
            factors
        }
    }

    async fn process_factor(
        &self,
        postcode: &str,
        category: Category,
        factor: &str,
        calls: &mut CallCounter,
    ) -> Result<Option<FactorResult>, PipelineError> {
        let query = build_query(factor, postcode);
        tracing::info!(category = category.name(), factor, query = %query, "searching");

        calls.record();
        let search_result = match self.search.search(&query).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    query = %query,
                    error = %e,
                    "search failed; continuing with empty result"
                );
                SearchResult::new()
            }
        };

        calls.record();
        let extraction = match self.extractor.extract(factor, &search_result).await {
            Ok(extraction) => extraction,
            Err(e) => {
                tracing::warn!(factor, error = %e, "event extraction failed");
                Extraction::empty()
            }
        };

        if extraction.events.is_empty() {
            tracing::info!(factor, "no events; factor skipped");
            return Ok(None);
        }

        let mut kept: Vec<Event> = Vec::new();
        for extracted in extraction.events {
            let location = self.resolver.resolve(&extracted.event, postcode).await;
            let valid_timeline = is_valid_timeline(extracted.timeline);
            let valid_location = is_valid_location(&extracted.event, &location, postcode);

            if valid_timeline && valid_location {
                tracing::info!(
                    factor,
                    event = %extracted.event,
                    timeline = extracted.timeline,
                    link = %extracted.link,
                    location = %location,
                    "event kept"
                );
                kept.push(extracted.with_location(location));
            } else {
                tracing::info!(
                    factor,
                    event = %extracted.event,
                    "event skipped: not UK or outside 2025-2029"
                );
            }
        }

        let result = if kept.is_empty() {
            None
        } else {
            Some(build_factor_result(query, kept, extraction.confidence_score)?)
        };

        if !self.options.factor_delay.is_zero() {
            tokio::time::sleep(self.options.factor_delay).await;
        }

        Ok(result)
    }
}

/// Assemble a factor result, scoring the serialized event list.
fn build_factor_result(
    query: String,
    events: Vec<Event>,
    confidence: f64,
) -> Result<FactorResult, PipelineError> {
    let events_text = serde_json::to_string(&events)?;
    Ok(FactorResult {
        query,
        impact_score: impact_score(&events_text, confidence),
        confidence_score: round2(confidence),
        events,
    })
}
