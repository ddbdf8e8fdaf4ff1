use application::chat_service::ChatService;
use domain::catalog::Catalog;
use domain::contact::ContactForm;
use domain::conversation::Stage;
use infrastructure::notifier::TerminalNotifier;
use tests::RecordingNotifier;

fn at_contact_stage(notifier: &RecordingNotifier) -> ChatService {
    let mut service = ChatService::new(Catalog::default(), Box::new(notifier.clone()));
    service.select_category("DATA MANAGEMENT").unwrap();
    service
        .select_question("Can you help with ETL processes?")
        .unwrap();
    service
}

#[test]
fn captured_lead_produces_the_fixed_notice() {
    let notifier = RecordingNotifier::new();
    let mut service = at_contact_stage(&notifier);

    service
        .submit_contact(&ContactForm::new("Jane", "jane@x.com", "555-1234"))
        .unwrap();

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Contact Information Received");
    assert_eq!(notices[0].description, "Our team will reach out to you soon!");
}

#[test]
fn incomplete_forms_never_notify() {
    let notifier = RecordingNotifier::new();
    let mut service = at_contact_stage(&notifier);

    for form in [
        ContactForm::default(),
        ContactForm::new("Jane", "", "555-1234"),
        ContactForm::new("", "jane@x.com", "555-1234"),
        ContactForm::new("Jane", "jane@x.com", ""),
    ] {
        service.submit_contact(&form).unwrap_err();
    }

    assert_eq!(service.stage(), Stage::Contact);
    assert!(notifier.notices().is_empty());
}

#[test]
fn completed_conversation_notifies_exactly_once() {
    let notifier = RecordingNotifier::new();
    let mut service = at_contact_stage(&notifier);
    let form = ContactForm::new("Jane", "jane@x.com", "555-1234");

    service.submit_contact(&form).unwrap();
    service.submit_contact(&form).unwrap_err();
    service.select_category("AI/ML").unwrap_err();

    assert_eq!(service.stage(), Stage::Complete);
    assert_eq!(notifier.notices().len(), 1);
}

#[test]
fn terminal_notifier_handles_a_full_walk() {
    let mut service = ChatService::new(Catalog::default(), Box::new(TerminalNotifier::new()));
    service.select_category("AI/ML").unwrap();
    service
        .select_question("Can you build predictive models?")
        .unwrap();
    service
        .submit_contact(&ContactForm::new("Jane", "jane@x.com", "555-1234"))
        .unwrap();
    assert_eq!(service.stage(), Stage::Complete);
}
