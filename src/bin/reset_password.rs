//! Reset a user's password directly in the store, bypassing the API.
//!
//! Usage: reset-password <email> <new-password>

use fisio_server::auth::password;
use fisio_server::{config, connect_hint};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (email, pass) = match args.as_slice() {
        [email, pass] => (email.as_str(), pass.as_str()),
        _ => {
            eprintln!("Usage: reset-password <email> <new-password>");
            std::process::exit(2);
        }
    };

    let url = match config::database_url_from_env() {
        Ok(url) => url,
        Err(e) => {
            eprintln!("configuration error: {e}");
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

    let result = sqlx::query("UPDATE users SET password_hash = $1 WHERE email = $2")
        .bind(&hash)
        .bind(email)
        .execute(&pool)
        .await;

    match result {
        Ok(done) if done.rows_affected() == 0 => {
            eprintln!("no user with email {email}");
            std::process::exit(1);
        }
        Ok(_) => println!("password updated for {email}"),
        Err(e) => {
            eprintln!("could not update the password: {e}");
            std::process::exit(1);
        }
    }
}
