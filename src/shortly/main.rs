use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shortly::api::{CmdMessage, ConfigAction, MessageLevel, ShortlyApi};
use shortly::clipboard::copy_to_clipboard;
use shortly::config::ShortlyConfig;
use shortly::error::{Result, ShortlyError};
use shortly::logging;
use shortly::model::{Session, ShortLink};
use shortly::store::fs::FileStore;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const DATA_ENV: &str = "SHORTLY_DATA";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ShortlyApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Register { email, password }) => handle_register(&mut ctx, email, password),
        Some(Commands::Login { email, password }) => handle_login(&mut ctx, email, password),
        Some(Commands::Logout) => handle_logout(&mut ctx),
        Some(Commands::Whoami) => handle_whoami(&mut ctx),
        Some(Commands::Shorten { url }) => handle_shorten(&mut ctx, url),
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::Delete { number, yes }) => handle_delete(&mut ctx, number, yes),
        Some(Commands::Copy { number }) => handle_copy(&mut ctx, number),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shortly", "shortly")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShortlyError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir(cli)?;
    let config = ShortlyConfig::load(&dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        ShortlyConfig::default()
    });
    let store = FileStore::new(dir.clone());
    Ok(AppContext {
        api: ShortlyApi::new(store, dir, config),
    })
}

fn read_password(given: Option<String>) -> Result<String> {
    match given {
        Some(p) => Ok(p),
        None => rpassword::prompt_password("Password: ").map_err(ShortlyError::Io),
    }
}

fn handle_register(ctx: &mut AppContext, email: String, password: Option<String>) -> Result<()> {
    let password = read_password(password)?;
    let result = ctx.api.register(&email, &password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_login(ctx: &mut AppContext, email: String, password: Option<String>) -> Result<()> {
    let password = read_password(password)?;
    let result = ctx.api.login(&email, &password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.logout()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_whoami(ctx: &mut AppContext) -> Result<()> {
    match ctx.api.restore_session()? {
        Some(session) => println!("{}", session.email),
        None => println!("{}", "Not logged in".dimmed()),
    }
    Ok(())
}

fn handle_shorten(ctx: &mut AppContext, url: String) -> Result<()> {
    let session = ctx.api.current_session()?;
    let result = ctx.api.shorten(&session, &url)?;
    for link in &result.affected_links {
        println!("{}  {}", link.short.bold(), link.long.dimmed());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let session = ctx.api.current_session()?;
    let result = ctx.api.list_links(&session)?;
    print_links(&result.listed_links);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, number: usize, yes: bool) -> Result<()> {
    let session = ctx.api.current_session()?;
    let index = to_index(number)?;
    let link = lookup(ctx, &session, number, index)?;

    if ctx.api.settings().confirm_delete && !yes && !confirm_delete(number, &link)? {
        print_messages(&[CmdMessage::info("Operation cancelled.")]);
        return Ok(());
    }

    let result = ctx.api.delete_link(&session, index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, number: usize) -> Result<()> {
    let session = ctx.api.current_session()?;
    let link = lookup(ctx, &session, number, to_index(number)?)?;
    copy_to_clipboard(&link.long)
        .map_err(|e| ShortlyError::Api(format!("Copy failed: {}", e)))?;
    print_messages(&[CmdMessage::success("Copied to clipboard!")]);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in ShortlyConfig::KEYS {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Display numbers start at 1.
fn to_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| ShortlyError::Api("Link numbers start at 1".to_string()))
}

fn lookup(
    ctx: &AppContext,
    session: &Session,
    number: usize,
    index: usize,
) -> Result<ShortLink> {
    ctx.api.get_link(session, index).map_err(|e| match e {
        ShortlyError::IndexOutOfRange { len, .. } => {
            ShortlyError::Api(format!("No link #{} (you have {})", number, len))
        }
        other => other,
    })
}

fn confirm_delete(number: usize, link: &ShortLink) -> Result<bool> {
    println!("{}. {}  {}", number, link.short, link.long.dimmed());
    print!("Are you sure you want to delete this link? [y/N]: ");
    io::stdout().flush().map_err(ShortlyError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(ShortlyError::Io)?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes" | "Yes"))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const SHORT_WIDTH: usize = 17;

fn print_links(links: &[ShortLink]) {
    if links.is_empty() {
        println!("No links yet.");
        return;
    }

    let number_width = links.len().to_string().len();
    for (i, link) in links.iter().enumerate() {
        let idx_str = format!("{:>width$}. ", i + 1, width = number_width);
        let short = format!("{:<width$} ", link.short, width = SHORT_WIDTH);
        let time_ago = link
            .created_at
            .map(format_time_ago)
            .unwrap_or_else(|| " ".repeat(TIME_WIDTH));

        let fixed_width = idx_str.width() + short.width() + TIME_WIDTH + 1;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let long_display = truncate_to_width(&link.long, available);
        let padding = available.saturating_sub(long_display.width());

        println!(
            "{}{}{}{} {}",
            idx_str.yellow(),
            short.bold(),
            long_display.dimmed(),
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
