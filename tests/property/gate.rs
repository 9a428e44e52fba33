use jobform::{SubmitAction, WizardConfig, can_submit};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn drafts_always_allowed(progress in 0.0f64..=100.0) {
        let decision = can_submit(SubmitAction::Draft, progress, &WizardConfig::default());
        prop_assert!(decision.allowed);
        prop_assert!(decision.reason.is_none());
    }

    #[test]
    fn publish_iff_threshold_reached(progress in 0.0f64..=100.0) {
        let decision = can_submit(SubmitAction::Publish, progress, &WizardConfig::default());
        prop_assert_eq!(decision.allowed, progress >= 70.0);
        prop_assert_eq!(decision.reason.is_some(), progress < 70.0);
    }

    #[test]
    fn publish_follows_configured_threshold(
        threshold in 0.0f64..=100.0,
        progress in 0.0f64..=100.0,
    ) {
        let config = WizardConfig { publish_threshold: threshold, ..WizardConfig::default() };
        let decision = can_submit(SubmitAction::Publish, progress, &config);
        prop_assert_eq!(decision.allowed, progress >= threshold);
    }
}
