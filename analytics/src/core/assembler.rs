//! Result assembly
//!
//! Merges legislator display fields with the derived statistics. No
//! computation happens here.

use serde::{Deserialize, Serialize};
use shared::{LegislatorDetails, LegislatorSummary};

use crate::core::alignment::MajorPartyAlignment;
use crate::core::similarity::PairwiseSimilarity;

/// A legislator as shown in a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegislatorCard {
    #[serde(flatten)]
    pub summary: LegislatorSummary,
    pub display_name: String,
    pub photo_url: Option<String>,
}

/// One row of the similarity table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRow {
    pub other: LegislatorCard,
    pub votes_together: u32,
    pub votes_against: u32,
    pub votes_total: u32,
    pub percent_agreement: f64,
}

/// Everything presented for a single legislator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegislatorReport {
    pub legislator: LegislatorDetails,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub party_alignment: Option<MajorPartyAlignment>,
    pub similarity: Vec<SimilarityRow>,
}

/// Shapes engine output into presentation records
#[derive(Debug, Clone)]
pub struct ResultAssembler {
    photo_base_url: String,
}

impl ResultAssembler {
    pub fn new(photo_base_url: impl Into<String>) -> Self {
        Self {
            photo_base_url: photo_base_url.into(),
        }
    }

    /// Portrait URL, absent when the legislator has no portrait reference
    pub fn photo_url(&self, image: Option<&str>) -> Option<String> {
        image
            .filter(|image| !image.is_empty())
            .map(|image| format!("{}{}", self.photo_base_url, image))
    }

    pub fn card(&self, summary: LegislatorSummary) -> LegislatorCard {
        LegislatorCard {
            display_name: summary.display_name(),
            photo_url: self.photo_url(summary.image.as_deref()),
            summary,
        }
    }

    pub fn similarity_row(&self, similarity: PairwiseSimilarity) -> SimilarityRow {
        SimilarityRow {
            other: self.card(similarity.other),
            votes_together: similarity.votes_together,
            votes_against: similarity.votes_against,
            votes_total: similarity.votes_total,
            percent_agreement: similarity.percent_agreement,
        }
    }

    pub fn report(
        &self,
        details: LegislatorDetails,
        party_alignment: Option<MajorPartyAlignment>,
        similarity: Vec<PairwiseSimilarity>,
    ) -> LegislatorReport {
        let summary = details.summary();
        LegislatorReport {
            display_name: summary.display_name(),
            photo_url: self.photo_url(summary.image.as_deref()),
            legislator: details,
            party_alignment,
            similarity: similarity
                .into_iter()
                .map(|entry| self.similarity_row(entry))
                .collect(),
        }
    }
}
