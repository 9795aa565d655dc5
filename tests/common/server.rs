//! Test server management.
//!
//! Spawns and manages robogated instances for integration testing.

use std::path::Path;
use std::process::{Child, Command};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::sleep;

/// Fleet used by most tests: three robots, each with three test-driver
/// devices on their own loopback connections and one greeting command.
pub const TEST_FLEET: &str = r#"
[[commands]]
name = "ping"
template = "pong"
"#;

fn robot_block(name: &str) -> String {
    let mut block = format!(
        r#"
[[robots]]
name = "{name}"

[[robots.commands]]
name = "robotTestFunction"
template = "hey {{robot}}, {{message}}"
"#
    );
    for i in 1..=3 {
        block.push_str(&format!(
            r#"
[[robots.connections]]
name = "Connection {i}"
adaptor = "loopback"

[[robots.devices]]
name = "Device {i}"
driver = "test"
connection = "Connection {i}"
"#
        ));
    }
    block
}

/// A test server instance.
pub struct TestServer {
    child: Child,
    port: u16,
    _data_dir: TempDir,
}

impl TestServer {
    /// Spawn a server with the standard three-robot fleet.
    pub async fn spawn(port: u16) -> anyhow::Result<Self> {
        let mut fleet = TEST_FLEET.to_string();
        for name in ["Robot 1", "Robot 2", "Robot 3"] {
            fleet.push_str(&robot_block(name));
        }
        Self::spawn_with(port, "", &fleet).await
    }

    /// Spawn a server with extra top-level config and a fleet definition.
    pub async fn spawn_with(port: u16, extra: &str, fleet: &str) -> anyhow::Result<Self> {
        let data_dir = tempfile::tempdir()?;
        let config_path = data_dir.path().join("robogate.toml");
        let config_content = format!(
            r#"
[server]
name = "test.gateway"
metrics_port = 0

[listen]
address = "127.0.0.1:{port}"

{extra}
{fleet}
"#
        );
        std::fs::write(&config_path, config_content)?;

        let child = spawn_binary(&config_path)?;
        let server = Self {
            child,
            port,
            _data_dir: data_dir,
        };

        server.wait_until_ready().await?;
        Ok(server)
    }

    /// Wait until the server is accepting connections.
    async fn wait_until_ready(&self) -> anyhow::Result<()> {
        for _ in 0..50 {
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                return Ok(());
            }
            sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("Server failed to start within 5 seconds")
    }

    /// Base URL, e.g. `http://127.0.0.1:17801`.
    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }
}

fn spawn_binary(config_path: &Path) -> std::io::Result<Child> {
    Command::new(env!("CARGO_BIN_EXE_robogated"))
        .arg(config_path)
        .env("RUST_LOG", "warn")
        .spawn()
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
