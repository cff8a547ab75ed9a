use std::{
    fs,
    io::{self, Write as _},
    sync::OnceLock,
};

use directory::{console, Args, Command, Config, Widget};
use service::{infra::InMemory, Service};
use tokio::io::{AsyncBufReadExt as _, BufReader};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Stdout is taken by the directory itself.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL.get().copied().unwrap_or(log::Level::WARN)
                            >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config, users } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        source,
        directory,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let path = users.unwrap_or(source.path);
    let file = fs::File::open(&path).map_err(|e| {
        log::error!("failed to open `{path}`: {e}");
    })?;
    let users = InMemory::from_json(file).map_err(|e| {
        log::error!("failed to load users from `{path}`: {e}");
    })?;
    log::info!("loaded {} users from `{path}`", users.len());

    let mut widget = Widget::new(Service::new(directory.into(), users));
    widget.mount();
    render(&widget)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let input = tokio::select! {
            line = lines.next_line() => Some(line),
            () = widget.tick() => None,
        };
        let Some(line) = input else {
            render(&widget)?;
            continue;
        };
        let Some(line) = line.map_err(|e| {
            log::error!("failed to read stdin: {e}");
        })?
        else {
            break;
        };

        match line.parse::<Command>() {
            Ok(cmd) => {
                if cmd.apply(&mut widget).is_break() {
                    break;
                }
            }
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        }
        render(&widget)?;
    }

    Ok(())
}

/// Renders the current [`Widget`] view to stdout.
fn render(widget: &Widget) -> Result<(), ()> {
    let mut out = io::stdout().lock();
    console::render(&widget.view(), &mut out)
        .and_then(|()| writeln!(out))
        .map_err(|e| {
            log::error!("failed to write to stdout: {e}");
        })
}
