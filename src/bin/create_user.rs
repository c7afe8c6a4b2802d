//! Provision a user with a bcrypt-hashed password, bypassing the API.
//!
//! Usage: create-user "Full Name" <email> <password>
//!
//! Reads the database settings from the environment (or `.env`), like the
//! server. Exits non-zero on bad arguments, missing configuration, or any
//! store failure.

use fisio_server::auth::password;
use fisio_server::{config, connect_hint};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (name, email, pass) = match args.as_slice() {
        [name, email, pass] => (name.as_str(), email.as_str(), pass.as_str()),
        _ => {
            eprintln!("Usage: create-user \"Full Name\" <email> <password>");
            std::process::exit(2);
        }
    };

    let url = match config::database_url_from_env() {
        Ok(url) => url,
        Err(e) => {
            eprintln!("configuration error: {e}");
            eprintln!("set DATABASE_URL, or the DB_USER/DB_PASSWORD/DB_HOST/DB_NAME variables, in the environment or a .env file");
            std::process::exit(1);
        }
    };

    let hash = match password::hash(pass) {
        Ok(hash) => hash,
        Err(e) => {
            eprintln!("could not hash the password: {e}");
            std::process::exit(1);
        }
    };

    let pool = match PgPoolOptions::new().max_connections(1).connect(&url).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("could not connect to the database: {e}");
            if let Some(hint) = connect_hint(&e) {
                eprintln!("hint: {hint}");
            }
            std::process::exit(1);
        }
    };

    let inserted = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(&hash)
    .fetch_one(&pool)
    .await;

    match inserted {
        Ok(id) => {
            println!("user '{name}' created with id {id}");
            println!("they can now log in with {email}");
        }
        Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some("23505") => {
            eprintln!("a user with email {email} already exists; use reset-password to change their password");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("could not create the user: {e}");
            std::process::exit(1);
        }
    }
}
