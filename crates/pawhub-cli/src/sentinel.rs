//! Sentinel implementations for driving a feed from a terminal.
//!
//! A browser client ties the next-page fetch to a marker element
//! scrolling into view; here the equivalent triggers are a fixed page
//! budget (scripted use) and a stdin prompt (interactive use).

use async_trait::async_trait;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use pawhub_core::Sentinel;

/// Reports visibility a fixed number of times, then teardown.
pub struct PageBudget(pub usize);

#[async_trait]
impl Sentinel for PageBudget {
    async fn became_visible(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

/// Asks on stderr whether to load the next page.
pub struct Prompt;

#[async_trait]
impl Sentinel for Prompt {
    async fn became_visible(&mut self) -> bool {
        eprint!("{} ", "Load more? [Y/n]".dimmed());
        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        match reader.read_line(&mut line).await {
            // EOF counts as teardown
            Ok(0) | Err(_) => false,
            Ok(_) => {
                let answer = line.trim().to_ascii_lowercase();
                answer.is_empty() || answer == "y" || answer == "yes"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn page_budget_fires_then_tears_down() {
        let mut sentinel = PageBudget(2);
        assert!(sentinel.became_visible().await);
        assert!(sentinel.became_visible().await);
        assert!(!sentinel.became_visible().await);
        assert!(!sentinel.became_visible().await);
    }
}
