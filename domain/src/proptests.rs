//! Property tests for the conversation transcript and stage progression.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::catalog::Catalog;
use crate::contact::ContactForm;
use crate::conversation::{Conversation, Stage};

fn assert_prefix(prefix: &[crate::conversation::Message], log: &[crate::conversation::Message]) {
    assert!(log.len() >= prefix.len());
    assert_eq!(&log[..prefix.len()], prefix);
}

proptest! {
    /// A full scripted walk appends exactly the expected number of messages,
    /// never rewrites earlier ones, and always ends Complete.
    #[test]
    fn full_walk_is_append_only_and_ordered(
        cat_idx in 0usize..6,
        q_idx in 0usize..3,
        name in "[A-Za-z]{1,16}",
        email in "[a-z]{1,8}@[a-z]{1,8}\\.com",
        phone in "[0-9]{3,12}",
    ) {
        let catalog = Catalog::default();
        let label = catalog.labels()[cat_idx];
        let question = catalog.questions_for(label).unwrap()[q_idx];

        let mut conv = Conversation::new(catalog);
        prop_assert_eq!(conv.messages().len(), 1);

        let snapshot = conv.messages().to_vec();
        conv.select_category(label).unwrap();
        assert_prefix(&snapshot, conv.messages());
        prop_assert_eq!(conv.messages().len(), 3);
        prop_assert_eq!(conv.stage(), Stage::Questions);

        let snapshot = conv.messages().to_vec();
        conv.select_question(question).unwrap();
        assert_prefix(&snapshot, conv.messages());
        prop_assert_eq!(conv.messages().len(), 5);
        prop_assert_eq!(conv.stage(), Stage::Contact);

        let snapshot = conv.messages().to_vec();
        conv.submit_contact(&ContactForm::new(name.as_str(), email.as_str(), phone.as_str()))
            .unwrap();
        assert_prefix(&snapshot, conv.messages());
        prop_assert_eq!(conv.messages().len(), 6);
        prop_assert_eq!(conv.stage(), Stage::Complete);
        prop_assert_eq!(conv.selected_category(), Some(label));
    }

    /// Rejected operations leave stage, selection, and transcript untouched,
    /// at every stage of the walk.
    #[test]
    fn rejections_never_mutate(
        cat_idx in 0usize..6,
        q_idx in 0usize..3,
        bogus in "[a-z]{1,16}",
    ) {
        let catalog = Catalog::default();
        let label = catalog.labels()[cat_idx];
        let question = catalog.questions_for(label).unwrap()[q_idx];
        let empty_form = ContactForm::new(bogus.as_str(), "", "");

        let mut conv = Conversation::new(catalog);

        let check = |conv: &mut Conversation| -> Result<(), TestCaseError> {
            let stage = conv.stage();
            let selected = conv.selected_category();
            let transcript = conv.messages().to_vec();

            // Labels are uppercase, so a lowercase pick can never match.
            prop_assert!(conv.select_category(&bogus).is_err());
            if stage != Stage::Category {
                prop_assert!(conv.select_category(label).is_err());
            }
            if stage != Stage::Questions {
                prop_assert!(conv.select_question(question).is_err());
            }
            prop_assert!(conv.submit_contact(&empty_form).is_err());

            prop_assert_eq!(conv.stage(), stage);
            prop_assert_eq!(conv.selected_category(), selected);
            prop_assert_eq!(conv.messages(), transcript.as_slice());
            Ok(())
        };

        check(&mut conv)?;
        conv.select_category(label).unwrap();
        check(&mut conv)?;
        conv.select_question(question).unwrap();
        check(&mut conv)?;
        conv.submit_contact(&ContactForm::new("Jane", "jane@x.com", "555-1234")).unwrap();
        check(&mut conv)?;
    }
}
