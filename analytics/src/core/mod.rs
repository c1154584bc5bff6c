//! Core business logic modules
//!
//! Pure computation over vote facts with no I/O dependencies

pub mod alignment;
pub mod assembler;
pub mod majority;
pub mod similarity;

// Re-export commonly used types
pub use alignment::{AlignmentCalculator, MajorPartyAlignment, PartyAlignment};
pub use assembler::{LegislatorCard, LegislatorReport, ResultAssembler, SimilarityRow};
pub use majority::MajorityResolver;
pub use similarity::{AgreementCounts, PairwiseSimilarity, SimilarityEngine};
