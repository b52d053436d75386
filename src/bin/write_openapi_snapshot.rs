// src/bin/write_openapi_snapshot.rs
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    for path in cep_weather::presentation::http::openapi::write_openapi_snapshot()? {
        println!("OpenAPI snapshot written to {}", path.display());
    }
    Ok(())
}
