use crate::provider::DispatchEvent;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Creates a standard spinner ProgressBar.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["◐", "◓", "◑", "◒", "●"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Prints dispatch events to stderr until the sending side is dropped.
pub async fn handle_dispatch_events(mut receiver: mpsc::Receiver<DispatchEvent>) {
    while let Some(event) = receiver.recv().await {
        match event {
            DispatchEvent::Echo(command) => {
                eprintln!("{} {}", "+".dimmed(), command.dimmed());
            }
            DispatchEvent::Launched { pid: Some(pid), .. } => {
                eprintln!("  {}", format!("started in background (pid {})", pid).dimmed());
            }
            DispatchEvent::Launched { pid: None, .. } => {}
            DispatchEvent::Failed { command, error } => {
                eprintln!("  {} {}: {}", "✗".red(), command, error);
            }
        }
    }
}

/// Channel plus printer task for a dispatcher's events.
pub fn spawn_event_printer() -> (mpsc::Sender<DispatchEvent>, JoinHandle<()>) {
    let (sender, receiver) = mpsc::channel::<DispatchEvent>(32);
    let task = tokio::spawn(handle_dispatch_events(receiver));
    (sender, task)
}

pub fn format_highlight(text: &str) -> String {
    format!("{}", text.cyan())
}

pub fn format_success(text: &str) -> String {
    format!("{}", text.green())
}

pub fn format_warning(text: &str) -> String {
    format!("{}", text.yellow())
}
