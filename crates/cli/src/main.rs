//! Tablebook CLI - Command-line interface for the reservation daemon

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9530";

#[derive(Parser)]
#[command(name = "tablebook")]
#[command(about = "Tablebook reservation CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "TABLEBOOK_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable times for a date
    Times {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Party size
        #[arg(short, long, default_value = "2")]
        guests: u32,
    },

    /// Check a single slot
    Check {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Time (HH:MM)
        time: String,

        /// Party size
        #[arg(short, long, default_value = "2")]
        guests: u32,

        /// Reservation to leave out of the check (when moving it)
        #[arg(long)]
        exclude: Option<i64>,
    },

    /// Book a table
    Book {
        #[command(flatten)]
        details: ReservationArgs,

        /// Owning user ID
        #[arg(long)]
        user_id: Option<i64>,
    },

    /// Change an existing reservation
    Reschedule {
        /// Reservation ID
        id: i64,

        #[command(flatten)]
        details: ReservationArgs,
    },

    /// Cancel a reservation
    Cancel {
        /// Reservation ID
        id: i64,
    },

    /// Show one reservation
    Show {
        /// Reservation ID
        id: i64,
    },

    /// List reservations
    List {
        /// Only reservations owned by this user
        #[arg(long)]
        user_id: Option<i64>,
    },

    /// Manage the table inventory
    #[command(subcommand)]
    Tables(TableCommands),
}

#[derive(Subcommand)]
enum TableCommands {
    /// List all tables
    List,

    /// Add a table
    Add(TableArgs),

    /// Replace a table's fields
    Update {
        /// Table ID
        id: i64,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Remove a table
    Delete {
        /// Table ID
        id: i64,
    },
}

#[derive(Args, Serialize)]
struct ReservationArgs {
    /// Date (YYYY-MM-DD)
    #[arg(long)]
    date: String,

    /// Time (HH:MM)
    #[arg(long)]
    time: String,

    /// Party size
    #[arg(short, long)]
    guests: u32,

    /// Guest name
    #[arg(long)]
    name: String,

    /// Contact email
    #[arg(long)]
    email: String,

    /// Contact phone
    #[arg(long)]
    phone: String,

    /// Free-form notes (allergies, occasion, ...)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    special_requests: Option<String>,
}

#[derive(Args)]
struct TableArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Seats
    #[arg(short, long)]
    capacity: u32,

    /// Area (Main, Outdoor, Private, ...)
    #[arg(long)]
    location: String,

    /// Take the table out of service
    #[arg(long)]
    inactive: bool,
}

impl TableArgs {
    fn into_params(self) -> Value {
        json!({
            "name": self.name,
            "capacity": self.capacity,
            "location": self.location,
            "is_active": !self.inactive,
        })
    }
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct Reservation {
    id: i64,
    date: String,
    time: String,
    guests: u32,
    name: String,
    email: String,
    phone: String,
    special_requests: Option<String>,
    user_id: Option<i64>,
}

#[derive(Tabled)]
struct ReservationRow {
    id: i64,
    date: String,
    time: String,
    guests: u32,
    name: String,
    email: String,
    phone: String,
    notes: String,
    user: String,
}

impl From<Reservation> for ReservationRow {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            date: r.date,
            time: r.time,
            guests: r.guests,
            name: r.name,
            email: r.email,
            phone: r.phone,
            notes: r.special_requests.unwrap_or_default(),
            user: r.user_id.map(|u| u.to_string()).unwrap_or_else(|| "-".into()),
        }
    }
}

#[derive(Deserialize, Tabled)]
struct TableRow {
    id: i64,
    name: String,
    capacity: u32,
    location: String,
    is_active: bool,
}

async fn call_rpc(url: &str, method: &str, params: Value) -> Result<Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

fn print_reservations(reservations: Vec<Reservation>) {
    if reservations.is_empty() {
        println!("{}", "No reservations".yellow());
        return;
    }
    let rows: Vec<ReservationRow> = reservations.into_iter().map(Into::into).collect();
    println!("{}", Table::new(rows));
}

fn print_tables(tables: Vec<TableRow>) {
    if tables.is_empty() {
        println!("{}", "No tables".yellow());
        return;
    }
    println!("{}", Table::new(tables));
}

fn reservation_params(details: ReservationArgs) -> Result<serde_json::Map<String, Value>> {
    match serde_json::to_value(details)? {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("Reservation details did not serialize to an object"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let url = cli.rpc_url.as_str();

    match cli.command {
        Commands::Times { date, guests } => {
            let result = call_rpc(
                url,
                "availability.times.v1",
                json!({ "date": date, "guests": guests }),
            )
            .await?;
            let times: Vec<String> = serde_json::from_value(result["times"].clone())?;

            println!(
                "{}",
                format!("Available times on {} for {} guests:", date, guests)
                    .cyan()
                    .bold()
            );
            if times.is_empty() {
                println!("  {}", "Fully booked".red());
            } else {
                println!("  {}", times.join("  "));
            }
        }

        Commands::Check {
            date,
            time,
            guests,
            exclude,
        } => {
            let result = call_rpc(
                url,
                "availability.check.v1",
                json!({
                    "date": date,
                    "time": time,
                    "guests": guests,
                    "exclude_reservation_id": exclude,
                }),
            )
            .await?;

            if result["available"].as_bool().unwrap_or(false) {
                println!("{}", format!("✓ {} {} is available", date, time).green().bold());
            } else {
                println!("{}", format!("✗ {} {} is not available", date, time).red().bold());
                if let Some(reason) = result["reason"].as_str() {
                    println!("  {}", reason);
                }
            }
        }

        Commands::Book { details, user_id } => {
            let mut params = reservation_params(details)?;
            if let Some(user_id) = user_id {
                params.insert("user_id".into(), json!(user_id));
            }

            let result = call_rpc(url, "reservation.create.v1", Value::Object(params)).await?;
            let reservation: Reservation = serde_json::from_value(result)?;

            println!("{}", "✓ Reservation confirmed".green().bold());
            println!();
            print_reservations(vec![reservation]);
        }

        Commands::Reschedule { id, details } => {
            let mut params = reservation_params(details)?;
            params.insert("id".into(), json!(id));

            let result = call_rpc(url, "reservation.update.v1", Value::Object(params)).await?;
            let reservation: Reservation = serde_json::from_value(result)?;

            println!("{}", format!("✓ Reservation {} updated", id).green().bold());
            println!();
            print_reservations(vec![reservation]);
        }

        Commands::Cancel { id } => {
            call_rpc(url, "reservation.delete.v1", json!({ "id": id })).await?;
            println!("{}", format!("✓ Reservation {} cancelled", id).green().bold());
        }

        Commands::Show { id } => {
            let result = call_rpc(url, "reservation.get.v1", json!({ "id": id })).await?;
            print_reservations(vec![serde_json::from_value(result)?]);
        }

        Commands::List { user_id } => {
            let result = call_rpc(url, "reservation.list.v1", json!({ "user_id": user_id })).await?;
            print_reservations(serde_json::from_value(result)?);
        }

        Commands::Tables(command) => match command {
            TableCommands::List => {
                let result = call_rpc(url, "table.list.v1", json!({})).await?;
                print_tables(serde_json::from_value(result)?);
            }
            TableCommands::Add(table) => {
                let result = call_rpc(url, "table.create.v1", table.into_params()).await?;
                println!("{}", "✓ Table added".green().bold());
                print_tables(vec![serde_json::from_value(result)?]);
            }
            TableCommands::Update { id, table } => {
                let mut params = table.into_params();
                params["id"] = json!(id);
                let result = call_rpc(url, "table.update.v1", params).await?;
                println!("{}", format!("✓ Table {} updated", id).green().bold());
                print_tables(vec![serde_json::from_value(result)?]);
            }
            TableCommands::Delete { id } => {
                call_rpc(url, "table.delete.v1", json!({ "id": id })).await?;
                println!("{}", format!("✓ Table {} removed", id).green().bold());
            }
        },
    }

    Ok(())
}
