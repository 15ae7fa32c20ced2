//! End-to-end board flows against the in-memory backend.

use voicemail_core::mock::MemoryBackend;
use voicemail_core::{
    BoardService, MediaFile, Post, PostDraft, SiteConfig, SortOrder, SubmitError,
};

fn rows() -> Vec<Post> {
    serde_json::from_str(
        r#"[
        {
            "id": 1,
            "created_at": "2024-05-01T10:00:00+00:00",
            "board": "contacts",
            "username": "quinn",
            "content": "[b]hi[/b] <script>alert(1)</script>",
            "status": "approved",
            "social_label": "IG",
            "social_link": "https://instagram.com/quinn"
        },
        {
            "id": 2,
            "created_at": "2024-05-02T10:00:00+00:00",
            "board": "contacts",
            "username": null,
            "content": "[i]second[/i]",
            "media_url": "https://cdn.example.com/media/contacts/2_ab.mp4"
        }
    ]"#,
    )
    .unwrap()
}

#[tokio::test]
async fn renders_stored_rows() {
    let service = BoardService::new(MemoryBackend::with_posts(rows()), SiteConfig::default());
    let html = service.load_board("contacts", SortOrder::Oldest, true).await;

    assert!(html.contains("<strong>hi</strong> &lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains(r#"<a href="https://instagram.com/quinn" class="post-status""#));
    assert!(html.contains("<em>second</em>"));
    assert!(html.contains(r#"<source src="https://cdn.example.com/media/contacts/2_ab.mp4""#));
    assert!(html.contains(">Anonymous</span>"));
    assert!(html.find("quinn").unwrap() < html.find("second").unwrap());
}

#[tokio::test]
async fn submitted_post_shows_up_in_listing() {
    let service = BoardService::new(MemoryBackend::new(), SiteConfig::default());
    let draft = PostDraft::message("[s]old[/s] new & improved")
        .with_username("<b>mallory</b>")
        .with_social("Discord", "https://discord.gg/abc")
        .with_media(MediaFile::new("pic.jpeg", vec![7; 1024]));

    let inserted = service.submit("contacts", draft).await.unwrap();
    assert!(inserted.media_url.as_deref().unwrap().ends_with(".jpeg"));

    let html = service.load_board("contacts", SortOrder::Newest, true).await;
    assert!(html.contains("<s>old</s> new &amp; improved"));
    assert!(html.contains("&lt;b&gt;mallory&lt;/b&gt;"));
    assert!(html.contains(">Discord</a>"));
    assert!(html.contains(r#"<img class="post-image" src="https://storage.test/media/contacts/"#));
}

#[tokio::test]
async fn rejected_submissions_leave_backend_untouched() {
    let service = BoardService::new(MemoryBackend::new(), SiteConfig::default());

    let err = service
        .submit("media", PostDraft::message(""))
        .await
        .unwrap_err();
    assert_eq!(err, SubmitError::EmptyContent);

    let huge = MediaFile::new("huge.webm", vec![0; 11 * 1024 * 1024]);
    let err = service
        .submit("media", PostDraft::message("too big").with_media(huge))
        .await
        .unwrap_err();
    assert_eq!(err, SubmitError::FileTooLarge { max_mb: 10 });

    assert!(service.backend().posts().is_empty());
    assert!(service.backend().uploads().is_empty());
    assert!(
        service
            .load_board("media", SortOrder::Newest, false)
            .await
            .contains("No posts yet")
    );
}
