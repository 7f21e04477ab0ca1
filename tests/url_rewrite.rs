use std::collections::BTreeMap;

use vanillicon::avatar::{Account, AvatarRequest, AvatarUrlResolver, Comment, Subject};
use vanillicon::host::{NoAccounts, RenderContext};
use vanillicon::types::Identifier;
use vanillicon::VanilliconConfig;

const SETTING: &str = "https://vanillicon.com/abcdef0123456789abcdef0123456789_100.png";

fn resolver() -> AvatarUrlResolver {
    AvatarUrlResolver::new(&VanilliconConfig::v1()).unwrap()
}

fn img(src: &str, size: u32) -> String {
    format!("<img alt='' src='{src}' class='avatar avatar-{size} photo' height='{size}' width='{size}' />")
}

#[test]
fn end_to_end_email_rewrite() {
    let r = resolver();
    let markup = img(SETTING, 45);
    let request = AvatarRequest::new(&markup, "user@example.com", 45, SETTING);

    let out = r.rewrite_avatar_url(&request, &NoAccounts);

    assert_eq!(
        out,
        img("https://vanillicon.com/63a710569261a24b3766275b7000ce8d_50.png", 45)
    );
}

#[test]
fn rewrite_replaces_every_occurrence() {
    let r = resolver();
    let markup = format!("<img src='{SETTING}' srcset='{SETTING} 2x' />");
    let request = AvatarRequest::new(&markup, "user@example.com", 150, SETTING);

    let out = r.rewrite_avatar_url(&request, &NoAccounts);

    let expected = "https://vanillicon.com/63a710569261a24b3766275b7000ce8d_200.png";
    assert_eq!(out, format!("<img src='{expected}' srcset='{expected} 2x' />"));
}

#[test]
fn invariant_unrelated_default_leaves_markup_unchanged() {
    let r = resolver();
    let markup = img("https://secure.gravatar.com/avatar/abc?s=96&d=mm", 96);

    for setting in ["mystery", "identicon", "", "https://example.com/abc_50.png", "https://vanillicon.com/abc.png"] {
        let request = AvatarRequest::new(&markup, "user@example.com", 96, setting);
        assert_eq!(r.rewrite_avatar_url(&request, &NoAccounts), markup, "setting {setting:?}");
    }
}

#[test]
fn invariant_discussion_settings_page_is_untouched() {
    let r = resolver();
    let markup = img(SETTING, 32);
    let request = AvatarRequest::new(&markup, "user@example.com", 32, SETTING)
        .with_context(RenderContext::admin("options-discussion.php"));

    assert_eq!(r.rewrite_avatar_url(&request, &NoAccounts), markup);
}

#[test]
fn other_admin_pages_are_rewritten() {
    let r = resolver();
    let markup = img(SETTING, 32);
    let request = AvatarRequest::new(&markup, "user@example.com", 32, SETTING)
        .with_context(RenderContext::admin("users.php"));

    assert_ne!(r.rewrite_avatar_url(&request, &NoAccounts), markup);
}

#[test]
fn discussion_page_outside_admin_is_rewritten() {
    let r = resolver();
    let markup = img(SETTING, 32);
    let context = RenderContext {
        is_admin: false,
        page: Some("options-discussion.php".into()),
    };
    let request = AvatarRequest::new(&markup, "user@example.com", 32, SETTING).with_context(context);

    assert_ne!(r.rewrite_avatar_url(&request, &NoAccounts), markup);
}

#[test]
fn invariant_rewrite_is_safe_to_repeat() {
    let r = resolver();
    let markup = img(SETTING, 45);
    let request = AvatarRequest::new(&markup, "user@example.com", 45, SETTING);
    let once = r.rewrite_avatar_url(&request, &NoAccounts);

    let again = AvatarRequest::new(&once, "user@example.com", 45, SETTING);
    assert_eq!(r.rewrite_avatar_url(&again, &NoAccounts), once);
}

#[test]
fn rewrite_resolves_each_subject_kind() {
    let r = resolver();
    let mut accounts = BTreeMap::new();
    accounts.insert(7u64, Account::new(7, "jane@example.com"));

    let cases: Vec<(Subject, &str)> = vec![
        (Subject::UserId(7), "jane@example.com"),
        (Subject::UserId(8), "100"),
        (Account::new(9, "alice@example.org").into(), "alice@example.org"),
        (Comment::new("", "Jane").into(), "Jane"),
        (Comment::default().into(), "100"),
    ];

    for (subject, identifier) in cases {
        let request = AvatarRequest::new(SETTING, subject.clone(), 100, SETTING);
        let expected = r.url_for(&Identifier::from(identifier), 100).to_string();
        assert_eq!(r.rewrite_avatar_url(&request, &accounts), expected, "subject {subject:?}");
    }
}

#[test]
fn alt_text_does_not_affect_output() {
    let r = resolver();
    let markup = img(SETTING, 45);
    let plain = AvatarRequest::new(&markup, "user@example.com", 45, SETTING);
    let with_alt = plain.clone().with_alt("Portrait of a user");

    assert_eq!(
        r.rewrite_avatar_url(&plain, &NoAccounts),
        r.rewrite_avatar_url(&with_alt, &NoAccounts)
    );
}
