use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sqlx::PgPool;
use yogastudio_cli::admin::create_admin;
use yogastudio_cli::seeder::{self, SeedConfig};

#[derive(Parser)]
#[command(name = "yogastudio-cli")]
#[command(about = "Yoga Studio CLI - Administrative tools for the Yoga Studio API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new administrator account
    CreateAdmin {
        /// First name of the administrator
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the administrator
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake teachers, members, sessions and attendance
    Seed {
        /// Number of sessions to create
        #[arg(short = 's', long, default_value = "20")]
        sessions: usize,

        /// Number of teachers to create
        #[arg(short = 't', long, default_value = "5")]
        teachers: usize,

        /// Number of members to create
        #[arg(short = 'u', long, default_value = "50")]
        users: usize,

        /// Maximum attendees per session
        #[arg(long, default_value = "12")]
        max_attendees: usize,
    },
    /// Delete the teachers, members and sessions created by `seed`; everything else stays
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match connect().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::CreateAdmin {
            first_name,
            last_name,
            email,
            password,
        } => handle_create_admin(&pool, first_name, last_name, email, password).await,
        Commands::Seed {
            sessions,
            teachers,
            users,
            max_attendees,
        } => {
            let config = SeedConfig::new(sessions)
                .with_teachers(teachers)
                .with_users(users)
                .with_max_attendees(max_attendees);
            seeder::seed_all(&pool, config).await
        }
        Commands::ClearSeed => seeder::clear_all(&pool).await,
    };

    if let Err(e) = result {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .map_err(|e| format!("Failed to connect to database: {}", e))?;

    Ok(pool)
}

fn prompt(value: Option<String>, label: &str) -> Result<String, Box<dyn std::error::Error>> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::new()
            .with_prompt(label)
            .interact_text()?),
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let first_name = prompt(first_name, "First name")?;
    let last_name = prompt(last_name, "Last name")?;
    let email = prompt(email, "Email address")?;
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    create_admin(pool, &first_name, &last_name, &email, &password).await?;

    println!("\n✅ Administrator created successfully!");
    println!("   Email: {}", email);
    println!("   Name: {} {}", first_name, last_name);

    Ok(())
}
