//! Command-line front end for the voicemail boards.
//!
//! - `sanitize [TEXT]` - Print the sanitized markup for TEXT (or stdin)
//! - `boards` - List the configured boards
//! - `render` - Render a board listing from a JSON export of backend rows

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use voicemail_core::{
    Backend, BackendError, BoardService, NewPost, Post, PostQuery, SiteConfig, SortOrder, sanitize,
};

#[derive(Parser, Debug)]
#[command(name = "voicemail")]
#[command(about = "Render and inspect the voicemail message boards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Site config file (TOML); stock boards when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sanitize a message and print the resulting markup
    Sanitize {
        /// Message text; read from stdin when omitted
        text: Option<String>,
    },
    /// List configured boards
    Boards,
    /// Render a board from exported rows
    Render {
        /// JSON array of post rows
        #[arg(long)]
        rows: PathBuf,
        /// Board name
        #[arg(short, long)]
        board: String,
        /// newest or oldest
        #[arg(short, long, default_value = "newest")]
        sort: SortOrder,
        /// Show user tags
        #[arg(long)]
        show_tags: bool,
    },
}

/// Read-only backend over a snapshot of exported rows.
#[derive(Debug, Default)]
pub struct SnapshotBackend {
    posts: Vec<Post>,
}

impl SnapshotBackend {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Load rows from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rows from {}", path.display()))?;
        let posts = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse rows in {}", path.display()))?;
        Ok(Self::new(posts))
    }
}

impl Backend for SnapshotBackend {
    async fn select_posts(&self, query: &PostQuery) -> Result<Vec<Post>, BackendError> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|post| post.board == query.board)
            .cloned()
            .collect();
        if query.ascending {
            posts.sort_by_key(|post| post.created_at);
        } else {
            posts.sort_by_key(|post| std::cmp::Reverse(post.created_at));
        }
        Ok(posts)
    }

    async fn insert_post(&self, _post: &NewPost) -> Result<(), BackendError> {
        Err(BackendError::Unsupported("insert into a row snapshot"))
    }

    async fn upload(&self, _bucket: &str, _path: &str, _bytes: &[u8]) -> Result<(), BackendError> {
        Err(BackendError::Unsupported("upload into a row snapshot"))
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/{}", bucket, path)
    }
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

/// Format the board table, one board per line, ending with the submit label.
pub fn list_boards(config: &SiteConfig) -> String {
    config
        .boards
        .iter()
        .map(|board| {
            let mut flags = Vec::new();
            if board.allow_media {
                flags.push(format!("media<={}MB", board.max_file_size_mb));
            }
            if board.collects_socials {
                flags.push("socials".to_string());
            }
            if board.requires_review {
                flags.push("review".to_string());
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };
            format!(
                "#{} - {}{} ({})\n",
                board.name,
                board.description,
                flags,
                board.submit_label()
            )
        })
        .collect()
}

/// Run a parsed command and return its output.
pub async fn run(cli: Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Sanitize { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut input = String::new();
                    std::io::stdin()
                        .read_to_string(&mut input)
                        .context("failed to read stdin")?;
                    input
                }
            };
            Ok(sanitize(&text))
        }
        Command::Boards => Ok(list_boards(&config)),
        Command::Render {
            rows,
            board,
            sort,
            show_tags,
        } => {
            let backend = SnapshotBackend::load(&rows)?;
            tracing::debug!(rows = %rows.display(), board = %board, "rendering snapshot");
            let service = BoardService::new(backend, config);
            Ok(service.load_board(&board, sort, show_tags).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_file(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "voicemail-cli-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from([
            "voicemail",
            "render",
            "--rows",
            "rows.json",
            "-b",
            "media",
            "-s",
            "oldest",
            "--show-tags",
        ])
        .unwrap();
        match cli.command {
            Command::Render {
                board,
                sort,
                show_tags,
                ..
            } => {
                assert_eq!(board, "media");
                assert_eq!(sort, SortOrder::Oldest);
                assert!(show_tags);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        let bad_sort = ["voicemail", "render", "--rows", "r", "-b", "x", "-s", "up"];
        assert!(Cli::try_parse_from(bad_sort).is_err());
    }

    #[tokio::test]
    async fn test_run_sanitize() {
        let cli = Cli::try_parse_from(["voicemail", "sanitize", "[b]hi[/b] <3"]).unwrap();
        assert_eq!(run(cli).await.unwrap(), "<strong>hi</strong> &lt;3");
    }

    #[tokio::test]
    async fn test_run_boards() {
        let cli = Cli::try_parse_from(["voicemail", "boards"]).unwrap();
        let out = run(cli).await.unwrap();
        assert_eq!(
            out,
            concat!(
                "#random - hey guys keep memes out of #general (Post Comment)\n",
                "#media - A board for sharing images and videos [media<=10MB] (Post Comment)\n",
                "#contacts - Drop ur handle and an intro if u want ",
                "[media<=10MB, socials] (Post Comment)\n",
            )
        );
    }

    #[test]
    fn test_list_boards_review() {
        let config = SiteConfig::from_toml(
            r#"
            [[boards]]
            name = "guestbook"
            description = "sign it"
            requires_review = true
            "#,
        )
        .unwrap();
        assert_eq!(
            list_boards(&config),
            "#guestbook - sign it [review] (Submit for Review)\n"
        );
    }

    #[tokio::test]
    async fn test_run_render() {
        let path = rows_file(
            "render",
            r#"[
                {"created_at": "2024-05-01T10:00:00Z", "board": "random",
                 "username": "a", "content": "older"},
                {"created_at": "2024-05-02T10:00:00Z", "board": "random",
                 "username": "b", "content": "[b]newer[/b]"},
                {"created_at": "2024-05-03T10:00:00Z", "board": "media",
                 "username": "c", "content": "other"}
            ]"#,
        );
        let cli = Cli::try_parse_from([
            "voicemail",
            "render",
            "--rows",
            path.to_str().unwrap(),
            "--board",
            "random",
        ])
        .unwrap();
        let html = run(cli).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(html.find("<strong>newer</strong>").unwrap() < html.find("older").unwrap());
        assert!(!html.contains("other"));
        assert!(html.contains(r#"style="display:none""#));
    }

    #[tokio::test]
    async fn test_run_render_missing_rows() {
        let cli = Cli::try_parse_from([
            "voicemail",
            "render",
            "--rows",
            "/nonexistent/voicemail-rows.json",
            "--board",
            "random",
        ])
        .unwrap();
        let err = run(cli).await.unwrap_err();
        assert!(err.to_string().contains("failed to read rows"));
    }

    #[tokio::test]
    async fn test_snapshot_is_read_only() {
        let backend = SnapshotBackend::default();
        let post = NewPost {
            board: "random".to_string(),
            username: "Anonymous".to_string(),
            content: "hi".to_string(),
            media_url: None,
            status: voicemail_core::PostStatus::Approved,
            social_label: None,
            social_link: None,
        };
        assert!(matches!(
            backend.insert_post(&post).await,
            Err(BackendError::Unsupported(_))
        ));
    }
}
