//! Fake/real classification result.

use serde::{Deserialize, Serialize};

/// Label order of the classifier's output logits.
pub const LABELS: [&str; 2] = ["Fake", "Real"];

/// Binary verdict derived from a [`Classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Fake,
    Real,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fake => "fake",
            Self::Real => "real",
        }
    }
}

/// Probability distribution over {Fake, Real}.
///
/// Values are in `[0, 1]` and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub fake: f32,
    pub real: f32,
}

impl Classification {
    /// Build a classification from raw model logits (`[fake, real]`) via softmax.
    pub fn from_logits(fake_logit: f32, real_logit: f32) -> Self {
        let probs = softmax(&[fake_logit, real_logit]);
        Self {
            fake: probs[0],
            real: probs[1],
        }
    }

    /// Build a classification from already-normalized probabilities.
    pub fn from_probabilities(fake: f32, real: f32) -> Self {
        Self { fake, real }
    }

    /// Ordered label/probability pairs, `Fake` first.
    pub fn probabilities(&self) -> [(&'static str, f32); 2] {
        [(LABELS[0], self.fake), (LABELS[1], self.real)]
    }

    /// Real only when `P(Real)` is strictly greater than 0.5.
    pub fn verdict(&self) -> Verdict {
        if self.real > 0.5 {
            Verdict::Real
        } else {
            Verdict::Fake
        }
    }
}

/// Softmax function.
pub(crate) fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|x| x / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(probs[2] > probs[1]);
        assert!(probs[1] > probs[0]);
    }

    #[test]
    fn softmax_handles_large_logits() {
        let probs = softmax(&[1000.0, 1001.0]);
        assert!(probs.iter().all(|p| p.is_finite()));
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn from_logits_is_a_distribution() {
        for (a, b) in [(0.0, 0.0), (-3.2, 4.1), (7.5, -7.5), (0.001, 0.002)] {
            let c = Classification::from_logits(a, b);
            assert!((0.0..=1.0).contains(&c.fake));
            assert!((0.0..=1.0).contains(&c.real));
            assert!((c.fake + c.real - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn equal_logits_split_evenly_and_resolve_fake() {
        let c = Classification::from_logits(1.5, 1.5);
        assert_eq!(c.real, 0.5);
        assert_eq!(c.verdict(), Verdict::Fake);
    }

    #[test]
    fn verdict_boundary() {
        assert_eq!(
            Classification::from_probabilities(0.5, 0.5).verdict(),
            Verdict::Fake
        );
        assert_eq!(
            Classification::from_probabilities(0.49999, 0.50001).verdict(),
            Verdict::Real
        );
        assert_eq!(
            Classification::from_probabilities(0.9, 0.1).verdict(),
            Verdict::Fake
        );
    }

    #[test]
    fn probabilities_have_two_labelled_entries() {
        let c = Classification::from_probabilities(0.25, 0.75);
        let probs = c.probabilities();
        assert_eq!(probs[0], ("Fake", 0.25));
        assert_eq!(probs[1], ("Real", 0.75));
    }
}
