mod menu;
mod render;
mod terminal;

use clap::ArgAction;
use menu::Menu;
use reel::store::Desk;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Graph rendering width in columns (defaults to the terminal width)
    #[arg(long, value_name = "COLS")]
    width: Option<u16>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let width = self.width.or_else(terminal::terminal_width).unwrap_or(80);

        let mut desk = Desk::new();
        let stdin = std::io::stdin();
        Menu::new(stdin.lock(), usize::from(width)).run(&mut desk)?;

        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
