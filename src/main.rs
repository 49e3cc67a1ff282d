//! termkit demo CLI
//!
//! One subcommand per widget, exercising the toolkit against the real
//! terminal.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};

use termkit::error::WidgetError;
use termkit::model::Entry;
use termkit::widgets::{
    Menu, PasswordInput, ProgressBar, ProgressSettings, RadioButton, SliderSettings, ValueSlider,
};

#[derive(Parser)]
#[command(name = "termkit")]
#[command(about = "Interactive terminal widget demos")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick one entry from a list, print its index
    Menu {
        /// Stop at the list boundaries instead of wrapping
        #[arg(long)]
        no_wrap: bool,

        /// Row the cursor starts on
        #[arg(long, default_value_t = 0)]
        preselect: usize,
    },

    /// Single-select checkbox list, print the checked entry
    Radio,

    /// Pick a number with a/d, print it
    Slider {
        #[arg(long, default_value_t = 0)]
        min: i64,

        #[arg(long, default_value_t = 100)]
        max: i64,
    },

    /// Masked password input, print its length
    Password,

    /// Simulated progress bar run
    Progress {
        /// Close the bar early in the abort state
        #[arg(long)]
        abort_at: Option<u32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Menu { no_wrap, preselect } => cmd_menu(no_wrap, preselect),
        Commands::Radio => cmd_radio(),
        Commands::Slider { min, max } => cmd_slider(min, max),
        Commands::Password => cmd_password(),
        Commands::Progress { abort_at } => cmd_progress(abort_at),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_menu(no_wrap: bool, preselect: usize) -> Result<(), WidgetError> {
    let entries: Vec<String> = ["First", "Second", "Third", "Fourth"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut menu = Menu::new(&entries, "termkit menu demo");
    menu.settings.wrap = !no_wrap;
    menu.settings.preselected_row = preselect;
    menu.settings.sub_header = Some("(demo list)".to_string());

    let choice = menu.run()?;
    println!("Selected index {} ({})", choice, entries[choice]);
    Ok(())
}

fn cmd_radio() -> Result<(), WidgetError> {
    let mut entries = vec![
        Entry::new("Red"),
        Entry::new("Green"),
        Entry::new("Blue"),
    ];

    RadioButton::new(&mut entries, "termkit radio demo").run()?;

    match entries.iter().find(|e| e.selected) {
        Some(entry) => println!("Checked: {}", entry.text),
        None => println!("Nothing checked"),
    }
    Ok(())
}

fn cmd_slider(min: i64, max: i64) -> Result<(), WidgetError> {
    let slider = ValueSlider::new(SliderSettings {
        message: "termkit slider demo".to_string(),
        minimum: min,
        maximum: max,
        ..SliderSettings::default()
    });

    let value = slider.run()?;
    println!();
    println!("Value: {}", value);
    Ok(())
}

fn cmd_password() -> Result<(), WidgetError> {
    let password = PasswordInput::new().run()?;
    println!("Read {} characters", password.chars().count());
    Ok(())
}

fn cmd_progress(abort_at: Option<u32>) -> Result<(), WidgetError> {
    let mut bar = ProgressBar::stdout(ProgressSettings::default());

    for tick in 0..=100u32 {
        if Some(tick) == abort_at {
            bar.abort()?;
            return Ok(());
        }
        bar.set_value(tick as f64)?;
        thread::sleep(Duration::from_millis(30));
    }
    Ok(())
}
