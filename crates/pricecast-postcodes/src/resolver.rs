use crate::candidates::candidate_places;
use crate::client::PostcodesClient;

/// Location string used when no candidate place matched.
#[must_use]
pub fn fallback_location(postcode: &str) -> String {
    format!("Within {postcode}")
}

/// Resolves a human-readable location for an event summary.
pub struct LocationResolver {
    client: PostcodesClient,
}

impl LocationResolver {
    #[must_use]
    pub fn new(client: PostcodesClient) -> Self {
        Self { client }
    }

    /// Returns `"<Place> (<postcode>)"` for the first candidate place in
    /// `summary` that names the postcode's ward, district, or parish, or
    /// `"Within <postcode>"` otherwise.
    ///
    /// The postcode is looked up once per candidate. A failed lookup only
    /// skips that candidate.
    pub async fn resolve(&self, summary: &str, postcode: &str) -> String {
        for place in candidate_places(summary) {
            match self.client.lookup(postcode).await {
                Ok(areas) if areas.matches(place) => {
                    return format!("{place} ({postcode})");
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(postcode, place, error = %e, "postcode lookup failed");
                }
            }
        }

        fallback_location(postcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_names_postcode() {
        assert_eq!(fallback_location("SW3"), "Within SW3");
    }
}
