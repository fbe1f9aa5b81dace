use async_trait::async_trait;

use crate::error::UniversityResult;
use crate::models::University;

/// Seam for the external university dataset.
///
/// Implementations load the full list; freshness is handled by the
/// cache layer, not here.
#[async_trait]
pub trait UniversitySource: Send + Sync {
    async fn load(&self) -> UniversityResult<Vec<University>>;
}

/// Source backed by a fixed in-process list (for development/testing)
#[derive(Debug, Clone, Default)]
pub struct StaticUniversitySource {
    universities: Vec<University>,
}

impl StaticUniversitySource {
    pub fn new(universities: Vec<University>) -> Self {
        Self { universities }
    }

    /// A small built-in dataset, enough to exercise the endpoint without
    /// the real dataset mounted.
    pub fn builtin() -> Self {
        Self::new(vec![
            University::new("Massachusetts Institute of Technology", "United States")
                .with_domain("mit.edu"),
            University::new("Stanford University", "United States").with_domain("stanford.edu"),
            University::new("University of Cambridge", "United Kingdom").with_domain("cam.ac.uk"),
            University::new("ETH Zurich", "Switzerland").with_domain("ethz.ch"),
            University::new("Indian Institute of Technology Bombay", "India")
                .with_domain("iitb.ac.in"),
            University::new("National University of Singapore", "Singapore")
                .with_domain("nus.edu.sg"),
        ])
    }
}

#[async_trait]
impl UniversitySource for StaticUniversitySource {
    async fn load(&self) -> UniversityResult<Vec<University>> {
        Ok(self.universities.clone())
    }
}
