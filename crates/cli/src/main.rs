use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use facewatch_core::dashboard::detection_simulator::DetectionSimulator;
use facewatch_core::dashboard::log_review::LogReview;
use facewatch_core::facade::data_facade::DataFacade;
use facewatch_core::query::csv_export::export_file_name;
use facewatch_core::query::log_filter::LogFilter;
use facewatch_core::shared::cancel::CancelToken;
use facewatch_core::shared::person::{Person, PersonDraft, PersonStatus, PersonUpdate};
use facewatch_core::shared::settings::SettingsMap;
use facewatch_core::store::domain::person_store::PersonStore;
use facewatch_core::store::infrastructure::file_settings_store::FileSettingsStore;
use facewatch_core::store::infrastructure::http_person_store::HttpPersonStore;
use facewatch_core::store::infrastructure::latency::Latency;
use facewatch_core::store::infrastructure::memory_log_store::MemoryLogStore;
use facewatch_core::store::infrastructure::memory_person_store::MemoryPersonStore;
use facewatch_core::store::infrastructure::sample_data::{sample_logs, sample_persons};

/// Operator console for the FaceWatch detection dashboard.
#[derive(Parser)]
#[command(name = "facewatch")]
struct Cli {
    /// Base URL of the remote persons service (e.g.
    /// http://localhost:5000/api). Without it the roster runs on a
    /// seeded in-memory store.
    #[arg(long)]
    api_url: Option<String>,

    /// Artificial latency in milliseconds for the local in-memory
    /// stores (0 disables the simulation).
    #[arg(long, default_value = "500")]
    latency_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the enrolled persons.
    Persons,

    /// Enroll a new person.
    Add {
        name: String,

        /// allowed or banned.
        #[arg(long, default_value = "allowed")]
        status: PersonStatus,

        /// Photo URI; a placeholder is used when omitted.
        #[arg(long)]
        image: Option<String>,
    },

    /// Update an enrolled person; omitted fields keep their value.
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// allowed or banned.
        #[arg(long)]
        status: Option<PersonStatus>,

        #[arg(long)]
        image: Option<String>,
    },

    /// Remove a person from the roster.
    Delete { id: String },

    /// Browse detection logs, optionally filtered and exported.
    Logs {
        /// Case-insensitive name substring.
        #[arg(long)]
        name: Option<String>,

        /// Earliest date to include (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Latest date to include (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Write the filtered logs as CSV instead of printing them.
        #[arg(long)]
        export: bool,

        /// Export destination (default: detection_logs_<instant>.csv).
        #[arg(long, requires = "export")]
        output: Option<PathBuf>,
    },

    /// Simulate a detection event at a capture location.
    Simulate {
        #[arg(long, default_value = "Main Entrance")]
        location: String,
    },

    /// Show the persisted settings mapping.
    Settings,

    /// Overwrite the settings mapping with a JSON object.
    PutSettings { json: String },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let facade = build_facade(&cli)?;
    let cancel = CancelToken::new();

    match cli.command {
        Command::Persons => {
            let persons = facade.list_persons(&cancel)?;
            print_persons(&persons);
        }
        Command::Add {
            name,
            status,
            image,
        } => {
            let person = facade.create_person(
                PersonDraft {
                    name,
                    status,
                    image,
                },
                &cancel,
            )?;
            println!("Enrolled {} ({})", person.name, person.id);
        }
        Command::Update {
            id,
            name,
            status,
            image,
        } => {
            let person = facade.update_person(
                &id,
                PersonUpdate {
                    name,
                    status,
                    image,
                },
                &cancel,
            )?;
            println!("Updated {} ({})", person.name, person.id);
        }
        Command::Delete { id } => {
            facade.delete_person(&id, &cancel)?;
            println!("Deleted {id}");
        }
        Command::Logs {
            name,
            from,
            to,
            export,
            output,
        } => {
            let mut review = LogReview::new();
            review.refresh(&facade, &cancel)?;
            review.set_filter(LogFilter {
                name,
                start_date: from,
                end_date: to,
            });

            if export {
                let path = output.unwrap_or_else(|| PathBuf::from(export_file_name(Utc::now())));
                fs::write(&path, review.export_csv())?;
                log::info!("Exported {} records", review.visible().len());
                println!("Wrote {}", path.display());
            } else {
                print_logs(&review);
            }
        }
        Command::Simulate { location } => {
            match DetectionSimulator::new(&facade).execute(&location, &cancel)? {
                Some(record) => println!(
                    "Detected {} ({}) at {}",
                    record.name, record.status, record.location
                ),
                None => println!("No persons enrolled; nothing to detect"),
            }
        }
        Command::Settings => {
            let settings = facade.get_settings(&cancel)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Command::PutSettings { json } => {
            let settings: SettingsMap = serde_json::from_str(&json)
                .map_err(|e| format!("settings must be a JSON object: {e}"))?;
            facade.put_settings(settings, &cancel)?;
            println!("Settings saved");
        }
    }

    Ok(())
}

fn build_facade(cli: &Cli) -> Result<DataFacade, Box<dyn std::error::Error>> {
    let latency = Latency::new(Duration::from_millis(cli.latency_ms));

    let persons: Box<dyn PersonStore> = match &cli.api_url {
        Some(base_url) => Box::new(HttpPersonStore::new(base_url.clone())?),
        None => Box::new(MemoryPersonStore::with_records(sample_persons()).with_latency(latency)),
    };

    let logs = Box::new(MemoryLogStore::with_records(sample_logs()).with_latency(latency));
    let settings = Box::new(FileSettingsStore::in_config_dir()?);

    Ok(DataFacade::new(persons, logs, settings))
}

fn print_persons(persons: &[Person]) {
    if persons.is_empty() {
        println!("No persons enrolled");
        return;
    }
    println!(
        "{:<38}  {:<20}  {:<8}  {}",
        "ID", "NAME", "STATUS", "LAST SEEN"
    );
    for person in persons {
        println!(
            "{:<38}  {:<20}  {:<8}  {}",
            person.id,
            person.name,
            person.status,
            person
                .last_seen
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        );
    }
}

fn print_logs(review: &LogReview) {
    let visible = review.visible();
    if visible.is_empty() {
        println!("No detection logs match");
        return;
    }
    println!(
        "{:<6}  {:<20}  {:<20}  {:<8}  {}",
        "ID", "TIMESTAMP", "NAME", "STATUS", "LOCATION"
    );
    for record in &visible {
        println!(
            "{:<6}  {:<20}  {:<20}  {:<8}  {}",
            record.id,
            record
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S"),
            record.name,
            record.status,
            record.location
        );
    }
}
