use actix_web::{web, App, HttpServer};
use tera::Tera;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use std::sync::{Arc, RwLock};

use blogsphere::{config::Config, feed::Feed, remote, web as pages, Globals};



#[actix_web::main]
async fn main() {

	tracing_subscriber::fmt()
		.with_env_filter( EnvFilter::from_default_env() )
		.init();

	let config = Config::from_env();
	let remote = remote::Handle::new( &config.service_url );
	let tera = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).unwrap();

	// The one bulk read that seeds the feed. When the service is down, the feed
	// starts out empty and can be filled later with the refresh button.
	let mut feed = Feed::new();
	match remote.list().await {
		Err(e) => error!("Error fetching posts: {}", e),
		Ok(posts) => {
			info!("Loaded {} posts from {}", posts.len(), config.service_url);
			feed.replace_all( posts );
		}
	}

	let globals = Arc::new( Globals {
		remote,
		feed: RwLock::new( feed ),
		tera
	});

	let server = match HttpServer::new(move || {

		App::new()
			.app_data(web::Data::new( globals.clone() ))
			.configure(pages::routes)
	}).bind( &config.bind_address ) {
		Err(e) => { error!("Unable to start HTTP server: {}", e); return },
		Ok(server) => server
	};
	info!("Serving the feed on {}...", config.bind_address);

	match server.run().await {
		Err(e) => error!("HTTP server error: {}", e),
		Ok(()) => {}
	}

	info!("HTTP server stopped.")
}
