use billtracker::compose::{generate_comment, TemplateSet};
use billtracker::types::{ContactInfo, Stance};

fn jane() -> ContactInfo {
    ContactInfo {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        ..Default::default()
    }
}

#[test]
fn support_comment_with_reason_and_sparse_contact() {
    let comment = generate_comment(
        "HB 1234",
        Stance::Support,
        "it helps my family",
        &jane(),
        &TemplateSet::default(),
    );
    insta::assert_snapshot!(comment, @r###"
    RE: HB 1234

    I am writing to express my strong support for this bill.

    it helps my family

    I urge you to support this legislation when it comes before you for a vote.

    Sincerely,
    Jane Doe
    "###);
}

#[test]
fn oppose_comment_without_reason_keeps_token_and_full_signature() {
    let contact = ContactInfo {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "360-555-0100".to_string(),
        address: "100 Main St".to_string(),
        city: "Olympia".to_string(),
        zip: "98501".to_string(),
        district: "22".to_string(),
    };
    let comment = generate_comment("SB 5100", Stance::Oppose, "", &contact, &TemplateSet::default());
    insta::assert_snapshot!(comment, @r###"
    RE: SB 5100

    I am writing to express my opposition to this bill.

    [YOUR CONCERN]

    I urge you to vote against this legislation.

    Sincerely,
    Jane Doe
    100 Main St
    Olympia, WA 98501
    Legislative District 22
    jane@example.com
    360-555-0100
    "###);
}

#[test]
fn neutral_comment_with_no_contact_ends_at_sincerely() {
    let comment = generate_comment(
        "HB 42",
        Stance::Neutral,
        "please hold a public hearing",
        &ContactInfo::default(),
        &TemplateSet::default(),
    );
    insta::assert_snapshot!(comment, @r###"
    RE: HB 42

    I am writing to share my thoughts on this bill.

    please hold a public hearing

    Thank you for considering my input as you evaluate this legislation.

    Sincerely,
    "###);
}
