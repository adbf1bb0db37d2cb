use swapi_client::transport::HttpTransport;
use swapi_client::SwapiService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env first so RUST_LOG in .env is seen
    let _ = dotenvy::dotenv();
    // Initialize tracing from RUST_LOG if provided
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let service = SwapiService::new(HttpTransport::new());

    let Some(person) = service.fetch_person(1).await else {
        anyhow::bail!("could not fetch person 1");
    };
    println!("{}", person.name);

    for film_url in &person.films {
        if let Some(film) = service.fetch_film(film_url).await {
            println!("  {} ({})", film.title, film.release_date);
        } else {
            eprintln!("  could not fetch film at {}", film_url);
        }
    }

    Ok(())
}
