use application::chat_service::ChatService;
use domain::catalog::Catalog;
use domain::contact::ContactForm;
use domain::conversation::{Role, Stage};
use tests::RecordingNotifier;

fn service_with(notifier: &RecordingNotifier) -> ChatService {
    ChatService::new(Catalog::default(), Box::new(notifier.clone()))
}

#[test]
fn every_category_and_question_walks_to_complete() {
    let catalog = Catalog::default();
    for entry in catalog.entries() {
        for question in &entry.questions {
            let notifier = RecordingNotifier::new();
            let mut service = service_with(&notifier);

            assert_eq!(service.stage(), Stage::Category);
            service.select_category(entry.label).unwrap();
            assert_eq!(service.stage(), Stage::Questions);
            assert_eq!(service.available_questions(), &entry.questions[..]);

            service.select_question(question).unwrap();
            assert_eq!(service.stage(), Stage::Contact);

            service
                .submit_contact(&ContactForm::new("Jane", "jane@x.com", "555-1234"))
                .unwrap();
            assert_eq!(service.stage(), Stage::Complete);
            assert_eq!(notifier.notices().len(), 1);
        }
    }
}

#[test]
fn transcript_grows_by_the_expected_amount_per_operation() {
    let notifier = RecordingNotifier::new();
    let mut service = service_with(&notifier);

    // Greeting only.
    assert_eq!(service.messages().len(), 1);

    service.select_category("WEB DESIGNING").unwrap();
    assert_eq!(service.messages().len(), 3);

    service
        .select_question("Do you build responsive websites?")
        .unwrap();
    assert_eq!(service.messages().len(), 5);

    service
        .submit_contact(&ContactForm::new("Jane", "jane@x.com", "555-1234"))
        .unwrap();
    assert_eq!(service.messages().len(), 6);

    let roles: Vec<Role> = service.messages().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::Bot,
            Role::User,
            Role::Bot,
            Role::User,
            Role::Bot,
            Role::Bot,
        ]
    );
}

#[test]
fn catalog_json_matches_the_script() {
    let catalog = Catalog::default();
    let json = presentation::cli::render_catalog_json(&catalog).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), catalog.entries().len());
    for (entry, expected) in entries.iter().zip(catalog.entries()) {
        assert_eq!(entry["label"], expected.label);
        let questions = entry["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 3);
    }
}
