use std::process::Command;

use tracing::info;

use crate::error::{Error, Result};

/// One-way notification primitives of the external review system.
///
/// `message` is a neutral note, `warn` a non-blocking warning, `fail` a
/// blocking failure. Callers never read results back from the review system.
pub trait ReviewSystem {
    fn message(&self, text: &str) -> Result<()>;
    fn warn(&self, text: &str) -> Result<()>;
    fn fail(&self, text: &str) -> Result<()>;
}

/// Prints each notice to stdout. The default backend, also used for dry runs.
#[derive(Default)]
pub struct ConsoleReview;

impl ConsoleReview {
    pub fn new() -> Self {
        Self
    }
}

impl ReviewSystem for ConsoleReview {
    fn message(&self, text: &str) -> Result<()> {
        println!("message: {text}");
        Ok(())
    }

    fn warn(&self, text: &str) -> Result<()> {
        println!("warn: {text}");
        Ok(())
    }

    fn fail(&self, text: &str) -> Result<()> {
        println!("fail: {text}");
        Ok(())
    }
}

/// Abstraction over `gh` CLI execution for testability.
pub trait GhCli {
    fn run(&self, args: &[&str]) -> Result<String>;
}

/// Real `gh` CLI client.
struct DefaultGhCli;

impl GhCli for DefaultGhCli {
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("gh")
            .args(args)
            .output()
            .map_err(|e| Error::Review(format!("failed to run gh: {e}")))?;

        if output.status.success() {
            String::from_utf8(output.stdout)
                .map_err(|e| Error::Review(format!("invalid utf8 from gh: {e}")))
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(Error::Review(format!("gh failed: {stderr}")))
        }
    }
}

/// Posts each notice as a pull-request comment via the `gh` CLI.
pub struct GitHubReview {
    pr: u64,
    client: Box<dyn GhCli>,
}

impl GitHubReview {
    pub fn new(pr: u64) -> Self {
        Self {
            pr,
            client: Box::new(DefaultGhCli),
        }
    }

    #[cfg(test)]
    fn with_client(pr: u64, client: Box<dyn GhCli>) -> Self {
        Self { pr, client }
    }

    fn comment(&self, body: &str) -> Result<()> {
        let pr = self.pr.to_string();
        self.client.run(&["pr", "comment", &pr, "--body", body])?;
        info!(pr = self.pr, "posted review comment");
        Ok(())
    }
}

impl ReviewSystem for GitHubReview {
    fn message(&self, text: &str) -> Result<()> {
        self.comment(text)
    }

    fn warn(&self, text: &str) -> Result<()> {
        self.comment(&format!("\u{26a0}\u{fe0f} {text}"))
    }

    fn fail(&self, text: &str) -> Result<()> {
        self.comment(&format!("\u{1f6ab} {text}"))
    }
}

pub enum AnyReview {
    Console(ConsoleReview),
    GitHub(GitHubReview),
}

impl ReviewSystem for AnyReview {
    fn message(&self, text: &str) -> Result<()> {
        match self {
            AnyReview::Console(r) => r.message(text),
            AnyReview::GitHub(r) => r.message(text),
        }
    }

    fn warn(&self, text: &str) -> Result<()> {
        match self {
            AnyReview::Console(r) => r.warn(text),
            AnyReview::GitHub(r) => r.warn(text),
        }
    }

    fn fail(&self, text: &str) -> Result<()> {
        match self {
            AnyReview::Console(r) => r.fail(text),
            AnyReview::GitHub(r) => r.fail(text),
        }
    }
}
