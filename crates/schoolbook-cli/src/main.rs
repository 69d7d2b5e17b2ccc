use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use schoolbook_cli::{accounts, seeder};
use schoolbook_config::PasswordConfig;

#[derive(Parser)]
#[command(name = "schoolbook-cli")]
#[command(about = "Schoolbook CLI - Administrative tools for Schoolbook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    CreateUser {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake parent records
    SeedParents {
        /// Number of parents to create
        #[arg(short = 'c', long, default_value = "50")]
        count: usize,
    },
    /// Delete every parent record
    ClearParents,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = schoolbook_db::init_db_pool(&database_url).await?;

    match cli.command {
        Commands::CreateUser {
            name,
            email,
            password,
        } => handle_create_user(&pool, name, email, password).await,
        Commands::SeedParents { count } => handle_seed_parents(&pool, count).await,
        Commands::ClearParents => handle_clear_parents(&pool).await,
    }
}

async fn handle_create_user(
    pool: &sqlx::PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let cost = PasswordConfig::from_env().bcrypt_cost;

    match accounts::create_user(pool, &name, &email, &password, cost).await {
        Ok(id) => {
            println!("\n✅ User created successfully!");
            println!("   ID: {}", id);
            println!("   Email: {}", email);
            println!("   Name: {}", name);
            Ok(())
        }
        Err(e) => {
            eprintln!("\n❌ Error creating user:\n{}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed_parents(pool: &sqlx::PgPool, count: usize) -> anyhow::Result<()> {
    match seeder::seed_parents(pool, count).await {
        Ok(ids) => {
            println!("✅ Created {} parents", ids.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("\n❌ Error seeding parents: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_parents(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    match seeder::clear_parents(pool).await {
        Ok(removed) => {
            println!("✅ Cleared {} parents", removed);
            Ok(())
        }
        Err(e) => {
            eprintln!("\n❌ Error clearing parents: {}", e);
            std::process::exit(1);
        }
    }
}
