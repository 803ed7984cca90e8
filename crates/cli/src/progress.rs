use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Runs `fut` behind a spinner, clearing it once the future resolves.
pub async fn with_spinner<F, T>(msg: &str, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let spinner = create_spinner(msg);
    let out = fut.await;
    spinner.finish_and_clear();
    out
}
