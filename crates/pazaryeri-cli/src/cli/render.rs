use colored::Colorize;
use pazaryeri::commands::{CmdMessage, CmdResult, MessageLevel};
use pazaryeri::init::StorefrontPaths;

pub(super) fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
    }
}

/// Text lines for a result, in display order: messages, then listed ids, then
/// count or theme when the command reports them.
pub(super) fn render_lines(result: &CmdResult) -> Vec<String> {
    let mut lines: Vec<String> = result.messages.iter().map(format_message).collect();

    let listing = result.messages.is_empty() && !result.favorite_ids.is_empty();
    if listing {
        lines.extend(result.favorite_ids.iter().map(|id| format!("♥ {}", id)));
    }

    if let Some(theme) = &result.theme {
        lines.push(format!(
            "Theme: {} ({})",
            theme.mode.to_string().bold(),
            theme.appearance
        ));
    } else if let Some(count) = result.favorite_count {
        if result.messages.is_empty() && !listing {
            lines.push(count.to_string());
        }
    }

    lines
}

pub(super) fn print_result(result: &CmdResult) {
    for line in render_lines(result) {
        println!("{}", line);
    }
}

pub(super) fn print_json(result: &CmdResult) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

pub(super) fn print_paths(paths: &StorefrontPaths) {
    println!("data:   {}", paths.data_dir.display());
    match &paths.config_file {
        Some(file) => println!("config: {}", file.display()),
        None => println!("config: {}", "(unavailable)".dimmed()),
    }
}
