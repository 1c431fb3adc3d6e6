use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tokio::sync::OnceCell;

static SERVER: OnceCell<Option<TestServer>> = OnceCell::const_new();

pub struct TestServer {
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests.
        // Inherits the environment, so the server sees DATABASE_URL; the
        // development-profile signing secret matches the one this test
        // process uses when decoding tokens.
        let mut cmd = Command::new("target/debug/bookmark-api-rust");
        cmd.env("BOOKMARK_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

/// Spawn the server once per test binary, after wiping both tables so
/// counting assertions start from a known state. Returns `None` (and the
/// tests no-op) when DATABASE_URL is not set.
pub async fn ensure_server() -> &'static Option<TestServer> {
    SERVER
        .get_or_init(|| async {
            if std::env::var("DATABASE_URL").is_err() {
                eprintln!("DATABASE_URL not set; skipping integration tests");
                return None;
            }

            let server = TestServer::spawn().expect("failed to spawn server binary");
            server
                .wait_ready(Duration::from_secs(15))
                .await
                .expect("server did not become ready");
            clean_db().await.expect("failed to clean database");
            Some(server)
        })
        .await
}

/// Bulk-delete both tables; used only for test setup.
async fn clean_db() -> Result<()> {
    let url = std::env::var("DATABASE_URL")?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await?;

    sqlx::query("DELETE FROM bookmarks").execute(&pool).await?;
    sqlx::query("DELETE FROM users").execute(&pool).await?;
    Ok(())
}

/// Fresh email per test so parallel tests never collide on the unique
/// constraint.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, uuid::Uuid::new_v4())
}

/// Register a user and log in, returning the bearer token.
pub async fn register_and_login(base_url: &str, email: &str, password: &str) -> Result<String> {
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/register", base_url))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "register failed: {}",
        res.status()
    );

    let res = client
        .post(format!("{}/auth/login", base_url))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    let token = body["access_token"]
        .as_str()
        .context("missing access_token")?
        .to_string();
    Ok(token)
}
