use actix_web::{middleware::Logger, App, HttpServer};
use clap::Parser;
use filmorate::{config::Args, routes, Database};
use log::info;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    std::env::set_var("RUST_BACKTRACE", "1");
    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    let db = Database::new();
    info!("listening on {}", args.listen);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .data(db.clone())
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .app_data(routes::path_config())
            .configure(routes::configure)
    });
    if let Some(workers) = args.workers {
        server = server.workers(workers);
    }
    server.bind(args.listen)?.run().await
}
