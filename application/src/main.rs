use std::{fmt::Display, fs, io, process::ExitCode, sync::OnceLock};

use listings::{
    args::{Command, Search},
    config::{Format, Output},
    render::{Categories, Detail, Results, Submitted},
    Args, Config, Service,
};
use serde::Serialize;
use service::{
    command::SubmitListing,
    infra::Memory,
    query::{
        properties::{Featured, List},
        property::{ById, Similar},
    },
    read::property::{self, list::Filter},
    Query as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
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

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn run() -> Result<(), ()> {
    let Args {
        config,
        json,
        command,
    } = Args::parse().unwrap_or_else(|e| e.exit());

    let Config {
        service,
        output: Output { format },
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let format = if json { Format::Json } else { format };
    let service = Service::new(service.into(), Memory::sample());

    match command {
        Command::Search(search) => search_properties(&service, search, format),
        Command::Show { id } => {
            let Ok(found) = service.execute(ById::by(id.clone()));
            let Some(property) = found else {
                log::error!("property `{id}` is not found");
                eprintln!("Property not found");
                return Err(());
            };
            let Ok(similar) = service.execute(Similar(id));

            print(
                &Detail {
                    property: &property,
                    similar: &similar,
                },
                format,
            )
        }
        Command::Featured => {
            let Ok(featured) =
                service.execute(Featured::by(property::Featured));

            print(
                &Results {
                    filter: &Filter::default(),
                    properties: &featured,
                },
                format,
            )
        }
        Command::Categories => print(&Categories::all(), format),
        Command::Submit { file } => {
            let form = fs::read_to_string(&file).map_err(|e| {
                log::error!("failed to read `{}`: {e}", file.display());
            })?;
            let form: SubmitListing =
                serde_json::from_str(&form).map_err(|e| {
                    log::error!(
                        "`{}` is not a valid form: {e}",
                        file.display(),
                    );
                })?;

            let draft = service.execute(form).map_err(|e| {
                let violations = &e.as_ref().violations;
                log::error!(
                    "listing rejected with {} error(s)",
                    violations.len(),
                );
                for violation in violations {
                    eprintln!("- {violation}");
                }
            })?;

            print(&Submitted(&draft), format)
        }
    }
}

fn search_properties(
    service: &Service,
    search: Search,
    format: Format,
) -> Result<(), ()> {
    let filter = search.into_filter();
    log::debug!(query = %filter.to_query(), "searching properties");

    let Ok(found) = service.execute(List::by(filter.clone()));

    print(
        &Results {
            filter: &filter,
            properties: &found,
        },
        format,
    )
}

fn print<T>(view: &T, format: Format) -> Result<(), ()>
where
    T: Display + Serialize,
{
    match format {
        Format::Text => println!("{view}"),
        Format::Json => {
            let json = serde_json::to_string_pretty(view).map_err(|e| {
                log::error!("failed to serialize output: {e}");
            })?;
            println!("{json}");
        }
    }
    Ok(())
}
