use std::io::{self, Write};

use async_trait::async_trait;

use greview_submit::{Confirmation, ConfirmationRequest, ConfirmationResponse, Notifier};

use crate::output;

/// Interactive confirmation on stdin. End of input cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConfirmation;

fn prompt_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a y/n answer; empty input takes the default. `None` for anything else.
fn parse_yes_no(answer: &str, default: bool) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn yes_no_hint(default: bool) -> &'static str {
    if default {
        "[Y/n]"
    } else {
        "[y/N]"
    }
}

fn ask_yes_no(question: &str, default: bool) -> io::Result<Option<bool>> {
    loop {
        let Some(answer) = prompt_input(&format!("{question} {} ", yes_no_hint(default)))? else {
            return Ok(None);
        };
        if let Some(value) = parse_yes_no(&answer, default) {
            return Ok(Some(value));
        }
        println!("Please answer y or n.");
    }
}

fn run_prompt(request: &ConfirmationRequest) -> io::Result<Option<ConfirmationResponse>> {
    println!(
        "Review change {} with {} ({} draft comment(s) will be published)",
        request.change,
        output::vote(&request.label, request.rating),
        request.draft_count
    );

    let current = request.message.clone().unwrap_or_default();
    let Some(typed) = prompt_input(&format!("Message [{current}]: "))? else {
        return Ok(None);
    };
    let message = if typed.is_empty() { request.message.clone() } else { Some(typed) };

    let Some(notify) = ask_yes_no("Notify reviewers and owner?", request.notify)? else {
        return Ok(None);
    };
    let Some(submit_change) = ask_yes_no("Submit change after posting?", request.submit_change)? else {
        return Ok(None);
    };
    match ask_yes_no("Post review?", true)? {
        Some(true) => Ok(Some(ConfirmationResponse {
            message,
            submit_change,
            notify,
        })),
        _ => Ok(None),
    }
}

#[async_trait]
impl Confirmation for PromptConfirmation {
    async fn confirm(&self, request: &ConfirmationRequest) -> Option<ConfirmationResponse> {
        match run_prompt(request) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("confirmation prompt failed: {e}");
                None
            }
        }
    }
}

/// Information on stdout, errors on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_information(&self, title: &str, message: &str) {
        println!("{title}: {message}");
    }

    fn notify_error(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}
