#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use registration_core::{ErrorClearing, FormConfig};
use tracing_subscriber::EnvFilter;

/// Global form configuration, set from command line
static FORM_CONFIG: OnceLock<FormConfig> = OnceLock::new();

/// Get the form configuration (set from command line or default)
pub fn get_form_config() -> FormConfig {
    FORM_CONFIG.get().copied().unwrap_or_default()
}

/// When displayed field errors are cleared
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClearErrors {
    /// Keep errors until the next submit
    OnSubmit,
    /// Clear a field's error as soon as it is edited
    OnEdit,
    /// Re-run validation on every edit after the first submit
    Revalidate,
}

impl From<ClearErrors> for ErrorClearing {
    fn from(value: ClearErrors) -> Self {
        match value {
            ClearErrors::OnSubmit => ErrorClearing::OnSubmit,
            ClearErrors::OnEdit => ErrorClearing::OnEdit,
            ClearErrors::Revalidate => ErrorClearing::Revalidate,
        }
    }
}

/// Registration - Account sign-up form
#[derive(Parser, Debug)]
#[command(name = "registration-desktop")]
#[command(about = "Registration - Account sign-up form")]
struct Args {
    /// When field errors are cleared after a failed submit
    #[arg(long, value_enum, default_value_t = ClearErrors::OnSubmit)]
    clear_errors: ClearErrors,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "registration_core=trace"
    #[arg(long)]
    log_level: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 700.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let config = FormConfig {
        error_clearing: args.clear_errors.into(),
    };
    let _ = FORM_CONFIG.set(config);

    tracing::info!(
        "Starting registration form (errors clear {})",
        config.error_clearing.as_str()
    );

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Registration")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
